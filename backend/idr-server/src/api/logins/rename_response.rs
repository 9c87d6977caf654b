use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameResponse {
    /// The record's name after the rename
    pub login_name: String,
}
