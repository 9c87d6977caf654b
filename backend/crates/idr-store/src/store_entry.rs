use idr_core::IdentityRecord;

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// A live record inside the store.
///
/// The access time lives outside `record` so lookups can bump it while
/// holding only the shared guard.
pub(crate) struct StoreEntry {
    record: IdentityRecord,
    last_accessed_nanos: AtomicI64,
}

impl StoreEntry {
    pub(crate) fn new(record: IdentityRecord) -> Self {
        let last_accessed_nanos = AtomicI64::new(to_nanos(record.last_accessed_at));
        Self {
            record,
            last_accessed_nanos,
        }
    }

    /// Whether the access time fits the nanosecond counter
    pub(crate) fn accepts(record: &IdentityRecord) -> bool {
        record.last_accessed_at.timestamp_nanos_opt().is_some()
    }

    pub(crate) fn record(&self) -> &IdentityRecord {
        &self.record
    }

    pub(crate) fn set_login_name(&mut self, login_name: String) {
        self.record.login_name = login_name;
    }

    /// Mark the record as accessed now and return a copy reflecting it.
    /// Never moves the access time backwards under racing lookups.
    pub(crate) fn touch(&self) -> IdentityRecord {
        let now = to_nanos(Utc::now());
        let previous = self.last_accessed_nanos.fetch_max(now, Ordering::AcqRel);
        self.with_access_time(previous.max(now))
    }

    /// Copy of the record with its current access time
    pub(crate) fn to_record(&self) -> IdentityRecord {
        self.with_access_time(self.last_accessed_nanos.load(Ordering::Acquire))
    }

    fn with_access_time(&self, nanos: i64) -> IdentityRecord {
        let mut record = self.record.clone();
        record.last_accessed_at = DateTime::<Utc>::from_timestamp_nanos(nanos);
        record
    }
}

fn to_nanos(at: DateTime<Utc>) -> i64 {
    // Entries hold checked times; the clock only leaves the range after 2262
    at.timestamp_nanos_opt().unwrap_or(i64::MAX)
}
