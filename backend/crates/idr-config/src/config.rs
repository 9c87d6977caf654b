use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, ServerConfig, SnapshotConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub snapshot: SnapshotConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. IDR_CONFIG_DIR env var, else ./.idr/
    /// 2. config.toml in that directory if it exists, else defaults
    /// 3. IDR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: IDR_CONFIG_DIR env var > ./.idr/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.snapshot.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (shutdown timeout {}s)",
            self.server.host, self.server.port, self.server.shutdown_timeout_secs
        );
        info!(
            "  snapshot: {} every {}s",
            self.snapshot.path, self.snapshot.interval_secs
        );
        info!(
            "  logging: {} (verbose: {}, colored: {})",
            self.logging.effective_level(),
            self.logging.verbose,
            self.logging.colored
        );
        info!(
            "  validation: login_name={}, real_name={}",
            self.validation.max_login_name_length, self.validation.max_real_name_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("IDR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("IDR_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "IDR_SERVER_SHUTDOWN_TIMEOUT_SECS",
            &mut self.server.shutdown_timeout_secs,
        );

        // Snapshot
        Self::apply_env_string("IDR_SNAPSHOT_PATH", &mut self.snapshot.path);
        Self::apply_env_parse(
            "IDR_SNAPSHOT_INTERVAL_SECS",
            &mut self.snapshot.interval_secs,
        );

        // Logging
        Self::apply_env_parse("IDR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("IDR_LOG_VERBOSE", &mut self.logging.verbose);
        Self::apply_env_bool("IDR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("IDR_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "IDR_VALIDATION_MAX_LOGIN_NAME_LENGTH",
            &mut self.validation.max_login_name_length,
        );
        Self::apply_env_parse(
            "IDR_VALIDATION_MAX_REAL_NAME_LENGTH",
            &mut self.validation.max_real_name_length,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
