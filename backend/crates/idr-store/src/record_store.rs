//! In-memory directory of identity records.
//!
//! Both indexes live behind one `RwLock` so no reader can ever see them
//! disagree. Mutations take the write guard; lookups and listings share
//! the read guard.

use crate::store_entry::StoreEntry;
use crate::{Result as StoreErrorResult, StoreError};

use idr_core::{IdentityRecord, RecordSummary};

use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared handle to the directory. Clones refer to the same records.
#[derive(Clone, Default)]
pub struct RecordStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    /// login name -> record id
    by_name: BTreeMap<String, Uuid>,
    /// record id -> record
    by_id: BTreeMap<Uuid, StoreEntry>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new login. Fails if the name is already taken.
    pub async fn create(
        &self,
        login_name: &str,
        real_name: &str,
        password_digest: Option<String>,
        client_origin: &str,
    ) -> StoreErrorResult<IdentityRecord> {
        let mut inner = self.inner.write().await;

        if inner.by_name.contains_key(login_name) {
            return Err(StoreError::AlreadyExists {
                login_name: login_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut record = IdentityRecord::new(
            login_name.to_string(),
            real_name.to_string(),
            password_digest,
            client_origin.to_string(),
        );
        while inner.by_id.contains_key(&record.id) {
            record.id = Uuid::new_v4();
        }

        inner.by_name.insert(record.login_name.clone(), record.id);
        inner.by_id.insert(record.id, StoreEntry::new(record.clone()));

        info!(
            "Created login {} ({}) from {} ({} total)",
            record.login_name,
            record.id,
            record.client_origin,
            inner.by_id.len()
        );

        Ok(record)
    }

    /// Look up a record by login name, updating its access time
    pub async fn find_by_name(&self, login_name: &str) -> StoreErrorResult<IdentityRecord> {
        let inner = self.inner.read().await;

        inner
            .by_name
            .get(login_name)
            .and_then(|id| inner.by_id.get(id))
            .map(StoreEntry::touch)
            .ok_or_else(|| StoreError::NotFound {
                key: login_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Look up a record by id, updating its access time
    pub async fn find_by_id(&self, id: Uuid) -> StoreErrorResult<IdentityRecord> {
        let inner = self.inner.read().await;

        inner
            .by_id
            .get(&id)
            .map(StoreEntry::touch)
            .ok_or_else(|| StoreError::NotFound {
                key: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Rename a login. The id and by-id entry are left untouched.
    ///
    /// Checks run in order: record exists, credential matches, new name free.
    pub async fn rename(
        &self,
        old_name: &str,
        new_name: &str,
        credential: Option<&str>,
    ) -> StoreErrorResult<String> {
        let mut guard = self.inner.write().await;
        let StoreInner { by_name, by_id } = &mut *guard;

        let (id, entry) = by_name
            .get(old_name)
            .and_then(|id| by_id.get_mut(id).map(|entry| (*id, entry)))
            .ok_or_else(|| StoreError::NotFound {
                key: old_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !entry.record().credential_matches(credential) {
            return Err(StoreError::Unauthorized {
                login_name: old_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if old_name == new_name {
            debug!("Rename of {} to itself, nothing to do", old_name);
            return Ok(new_name.to_string());
        }

        if by_name.contains_key(new_name) {
            return Err(StoreError::AlreadyExists {
                login_name: new_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        entry.set_login_name(new_name.to_string());
        by_name.remove(old_name);
        by_name.insert(new_name.to_string(), id);

        info!("Renamed login {} -> {} ({})", old_name, new_name, id);

        Ok(new_name.to_string())
    }

    /// Remove a login from both indexes, returning the removed record
    pub async fn delete(
        &self,
        login_name: &str,
        credential: Option<&str>,
    ) -> StoreErrorResult<IdentityRecord> {
        let mut guard = self.inner.write().await;
        let StoreInner { by_name, by_id } = &mut *guard;

        let id = by_name
            .get(login_name)
            .copied()
            .filter(|id| by_id.contains_key(id))
            .ok_or_else(|| StoreError::NotFound {
                key: login_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(entry) = by_id.get(&id)
            && !entry.record().credential_matches(credential)
        {
            return Err(StoreError::Unauthorized {
                login_name: login_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        by_name.remove(login_name);
        let removed = by_id
            .remove(&id)
            .map(|entry| entry.to_record())
            .ok_or_else(|| StoreError::NotFound {
                key: login_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            "Deleted login {} ({}) ({} remaining)",
            login_name,
            id,
            by_id.len()
        );

        Ok(removed)
    }

    /// All login names, in name order
    pub async fn list_names(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        inner.by_name.keys().cloned().collect()
    }

    /// All record ids, in id order
    pub async fn list_ids(&self) -> Vec<Uuid> {
        let inner = self.inner.read().await;
        inner.by_id.keys().copied().collect()
    }

    /// Summaries of every record, in name order
    pub async fn list_all(&self) -> Vec<RecordSummary> {
        let inner = self.inner.read().await;
        inner
            .by_name
            .values()
            .filter_map(|id| inner.by_id.get(id))
            .map(|entry| RecordSummary::from(entry.to_record()))
            .collect()
    }

    /// Number of live records
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Replace the whole directory with `records`.
    ///
    /// The set is checked before anything is swapped in: a repeated login
    /// name or id, or an access time that cannot be held as Unix nanos
    /// (outside 1677..2262), rejects the load and leaves the current
    /// contents intact.
    pub async fn load_snapshot(&self, records: Vec<IdentityRecord>) -> StoreErrorResult<usize> {
        let mut by_name = BTreeMap::new();
        let mut by_id = BTreeMap::new();

        for record in records {
            if by_name.contains_key(&record.login_name) {
                return Err(StoreError::DuplicateRecord {
                    message: format!("login name {} appears more than once", record.login_name),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if by_id.contains_key(&record.id) {
                return Err(StoreError::DuplicateRecord {
                    message: format!("id {} appears more than once", record.id),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            if !StoreEntry::accepts(&record) {
                return Err(StoreError::TimestampOutOfRange {
                    at: record.last_accessed_at.to_rfc3339(),
                    login_name: record.login_name,
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            by_name.insert(record.login_name.clone(), record.id);
            by_id.insert(record.id, StoreEntry::new(record));
        }

        let count = by_id.len();
        let mut inner = self.inner.write().await;
        *inner = StoreInner { by_name, by_id };

        info!("Loaded {} records into the directory", count);

        Ok(count)
    }

    /// Point-in-time copy of every record, in name order.
    ///
    /// Taken under the write guard so no lookup can bump an access time
    /// halfway through the copy.
    pub async fn export_snapshot(&self) -> Vec<IdentityRecord> {
        let inner = self.inner.write().await;
        inner
            .by_name
            .values()
            .filter_map(|id| inner.by_id.get(id))
            .map(StoreEntry::to_record)
            .collect()
    }
}
