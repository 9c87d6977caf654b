//! Identity record - one login entry in the directory.

use crate::RecordSummary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A login registered with the directory.
///
/// `id` is assigned once at creation and never changes; `login_name` is
/// unique among live records but may be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub id: Uuid,
    pub login_name: String,
    pub real_name: String,
    /// Digest of the record's password. `None` means the record is unprotected.
    pub password_digest: Option<String>,
    /// Network address the record was created from
    pub client_origin: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl IdentityRecord {
    /// Create a new record with a fresh id, stamped with the current time
    pub fn new(
        login_name: String,
        real_name: String,
        password_digest: Option<String>,
        client_origin: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            login_name,
            real_name,
            password_digest,
            client_origin,
            created_at: now,
            last_accessed_at: now,
        }
    }

    /// Check if rename/delete on this record requires a credential
    pub fn is_password_protected(&self) -> bool {
        self.password_digest.is_some()
    }

    /// Check whether `credential` authorizes a mutation of this record.
    ///
    /// Unprotected records accept any credential, including none. Protected
    /// records need an exact match against the stored digest.
    pub fn credential_matches(&self, credential: Option<&str>) -> bool {
        match self.password_digest.as_deref() {
            None => true,
            Some(digest) => credential == Some(digest),
        }
    }

    /// Caller-facing view with the digest stripped
    pub fn summary(&self) -> RecordSummary {
        RecordSummary::from(self)
    }
}
