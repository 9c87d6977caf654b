use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Login name of the removed record
    pub deleted: String,
}
