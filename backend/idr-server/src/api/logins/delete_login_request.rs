use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteLoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}
