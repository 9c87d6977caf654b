use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_LOGIN_NAME_LENGTH, DEFAULT_MAX_REAL_NAME_LENGTH,
    MAX_NAME_LENGTH_LIMIT,
};

use serde::Deserialize;

/// Limits applied to incoming directory requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_login_name_length: usize,
    pub max_real_name_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_login_name_length: DEFAULT_MAX_LOGIN_NAME_LENGTH,
            max_real_name_length: DEFAULT_MAX_REAL_NAME_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_limit("max_login_name_length", self.max_login_name_length)?;
        check_limit("max_real_name_length", self.max_real_name_length)
    }
}

fn check_limit(key: &str, value: usize) -> ConfigErrorResult<()> {
    if value == 0 || value > MAX_NAME_LENGTH_LIMIT {
        return Err(ConfigError::validation(format!(
            "validation.{} must be 1-{}, got {}",
            key, MAX_NAME_LENGTH_LIMIT, value
        )));
    }
    Ok(())
}
