//! On-disk snapshot schema.
//!
//! Format version 1 is a JSON document:
//!
//! ```json
//! { "format_version": 1, "written_at": "...", "records": [ { ... } ] }
//! ```
//!
//! Decoding reads `format_version` on its own first. Any other version is
//! rejected before the rest of the document is interpreted. Unknown fields
//! inside a supported version are ignored.

use crate::{Result as StoreErrorResult, StoreError};

use idr_core::IdentityRecord;

use std::panic::Location;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// One record as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub id: Uuid,
    pub login_name: String,
    pub real_name: String,
    #[serde(default)]
    pub password_digest: Option<String>,
    #[serde(default)]
    pub client_origin: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl From<IdentityRecord> for SnapshotRecord {
    fn from(record: IdentityRecord) -> Self {
        Self {
            id: record.id,
            login_name: record.login_name,
            real_name: record.real_name,
            password_digest: record.password_digest,
            client_origin: record.client_origin,
            created_at: record.created_at,
            last_accessed_at: record.last_accessed_at,
        }
    }
}

impl From<SnapshotRecord> for IdentityRecord {
    fn from(record: SnapshotRecord) -> Self {
        Self {
            id: record.id,
            login_name: record.login_name,
            real_name: record.real_name,
            password_digest: record.password_digest,
            client_origin: record.client_origin,
            created_at: record.created_at,
            last_accessed_at: record.last_accessed_at,
        }
    }
}

/// A full export of the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub format_version: u32,
    pub written_at: DateTime<Utc>,
    pub records: Vec<SnapshotRecord>,
}

#[derive(Deserialize)]
struct SnapshotHeader {
    format_version: u32,
}

impl SnapshotFile {
    pub fn from_records(records: Vec<IdentityRecord>) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            written_at: Utc::now(),
            records: records.into_iter().map(SnapshotRecord::from).collect(),
        }
    }

    pub fn into_records(self) -> Vec<IdentityRecord> {
        self.records.into_iter().map(IdentityRecord::from).collect()
    }

    pub fn encode(&self) -> StoreErrorResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn decode(bytes: &[u8]) -> StoreErrorResult<Self> {
        let header: SnapshotHeader = serde_json::from_slice(bytes)?;
        if header.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: header.format_version,
                supported: SNAPSHOT_FORMAT_VERSION,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read a snapshot from `path`. `Ok(None)` if the file does not exist.
    pub async fn read_from(path: &Path) -> StoreErrorResult<Option<Self>> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        Self::decode(&bytes).map(Some)
    }

    /// Write to `<path>.tmp` and rename over `path`, so readers only ever
    /// see a complete file.
    pub async fn write_to(&self, path: &Path) -> StoreErrorResult<()> {
        let data = self.encode()?;

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(dir, e))?;
        }

        let tmp = tmp_path(path);
        let mut file = tokio::fs::File::create(&tmp)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        file.write_all(&data)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        file.sync_all()
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        drop(file);

        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| StoreError::io(path, e))?;

        Ok(())
    }
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
