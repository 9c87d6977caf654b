use idr_core::{InfoKind, RecordSummary};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a GetInfo request.
///
/// Serialized with the kind as a tag, e.g. `{"kind":"users","users":[..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InfoResponse {
    Users { users: Vec<String> },
    Ids { ids: Vec<Uuid> },
    All { logins: Vec<RecordSummary> },
}

impl InfoResponse {
    pub fn kind(&self) -> InfoKind {
        match self {
            Self::Users { .. } => InfoKind::Users,
            Self::Ids { .. } => InfoKind::Ids,
            Self::All { .. } => InfoKind::All,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Users { users } => users.len(),
            Self::Ids { ids } => ids.len(),
            Self::All { logins } => logins.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
