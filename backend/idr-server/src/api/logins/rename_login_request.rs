use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameLoginRequest {
    pub new_login_name: String,

    #[serde(default)]
    pub password: Option<String>,
}
