use crate::IdentityRecord;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record as shown to callers. The password digest never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: Uuid,
    pub login_name: String,
    pub real_name: String,
    pub password_protected: bool,
    pub client_origin: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl From<&IdentityRecord> for RecordSummary {
    fn from(record: &IdentityRecord) -> Self {
        Self {
            id: record.id,
            login_name: record.login_name.clone(),
            real_name: record.real_name.clone(),
            password_protected: record.is_password_protected(),
            client_origin: record.client_origin.clone(),
            created_at: record.created_at,
            last_accessed_at: record.last_accessed_at,
        }
    }
}

impl From<IdentityRecord> for RecordSummary {
    fn from(record: IdentityRecord) -> Self {
        Self::from(&record)
    }
}

impl fmt::Display for RecordSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) id={} origin={} created={} last_accessed={}{}",
            self.login_name,
            self.real_name,
            self.id,
            self.client_origin,
            self.created_at.to_rfc3339(),
            self.last_accessed_at.to_rfc3339(),
            if self.password_protected {
                " [protected]"
            } else {
                ""
            }
        )
    }
}
