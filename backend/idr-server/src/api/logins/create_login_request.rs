use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoginRequest {
    pub login_name: String,

    /// Defaults to the caller's local account name
    #[serde(default)]
    pub real_name: Option<String>,

    /// Protects later rename/delete when present
    #[serde(default)]
    pub password: Option<String>,
}
