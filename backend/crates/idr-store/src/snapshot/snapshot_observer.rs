/// Told about every snapshot write, whichever path triggered it
pub trait SnapshotObserver: Send + Sync {
    fn snapshot_written(&self, records: usize);

    fn snapshot_failed(&self);
}

/// Observer that ignores everything
pub struct NoopObserver;

impl SnapshotObserver for NoopObserver {
    fn snapshot_written(&self, _records: usize) {}

    fn snapshot_failed(&self) {}
}
