pub mod error;
pub mod record_store;
pub mod snapshot;

pub(crate) mod store_entry;

#[cfg(test)]
mod tests;

pub use error::{Result, StoreError};
pub use record_store::RecordStore;
pub use snapshot::snapshot_file::{SNAPSHOT_FORMAT_VERSION, SnapshotFile, SnapshotRecord};
pub use snapshot::snapshot_manager::SnapshotManager;
pub use snapshot::snapshot_observer::{NoopObserver, SnapshotObserver};
