use crate::{
    NoopObserver, RecordStore, Result as StoreErrorResult, SnapshotFile, SnapshotObserver,
};

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::time::{Instant, MissedTickBehavior};

/// Keeps a snapshot file in step with a [`RecordStore`].
///
/// Restore runs once before the service takes requests. After that,
/// [`SnapshotManager::run`] writes on a fixed interval until shutdown, and
/// [`SnapshotManager::final_snapshot`] makes one last bounded attempt.
#[derive(Clone)]
pub struct SnapshotManager {
    store: RecordStore,
    path: PathBuf,
    interval: Duration,
    observer: Arc<dyn SnapshotObserver>,
}

impl SnapshotManager {
    pub fn new(store: RecordStore, path: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            store,
            path: path.into(),
            interval: interval.max(Duration::from_millis(1)),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Report every write outcome to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn SnapshotObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Load the snapshot file into the store.
    ///
    /// A missing, unreadable, corrupt or unsupported snapshot leaves the
    /// store empty; the failure is logged and the service carries on.
    /// Returns the number of records restored.
    pub async fn restore(&self) -> usize {
        match SnapshotFile::read_from(&self.path).await {
            Ok(Some(snapshot)) => {
                let written_at = snapshot.written_at;
                match self.store.load_snapshot(snapshot.into_records()).await {
                    Ok(count) => {
                        info!(
                            "Restored {} records from {} (written {})",
                            count,
                            self.path.display(),
                            written_at.to_rfc3339()
                        );
                        count
                    }
                    Err(e) => {
                        warn!(
                            "Snapshot {} is inconsistent, starting with an empty directory: {}",
                            self.path.display(),
                            e
                        );
                        0
                    }
                }
            }
            Ok(None) => {
                info!(
                    "No snapshot at {}, starting with an empty directory",
                    self.path.display()
                );
                0
            }
            Err(e) => {
                warn!(
                    "Snapshot {} could not be loaded, starting with an empty directory: {}",
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    /// Export the store and write it out. The store guard is released
    /// before any file I/O starts.
    pub async fn snapshot_now(&self) -> StoreErrorResult<usize> {
        let result = self.write_snapshot().await;
        match &result {
            Ok(count) => self.observer.snapshot_written(*count),
            Err(_) => self.observer.snapshot_failed(),
        }
        result
    }

    async fn write_snapshot(&self) -> StoreErrorResult<usize> {
        let records = self.store.export_snapshot().await;
        let count = records.len();

        SnapshotFile::from_records(records)
            .write_to(&self.path)
            .await?;

        debug!("Wrote snapshot of {} records to {}", count, self.path.display());

        Ok(count)
    }

    /// Write a snapshot every interval until `shutdown` resolves.
    /// A failed write is logged and the timer keeps going.
    pub async fn run<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Snapshot timer started: every {}s to {}",
            self.interval.as_secs_f64(),
            self.path.display()
        );

        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Snapshot timer stopped");
                    break;
                }
                _ = ticker.tick() => {
                    match self.snapshot_now().await {
                        Ok(count) => info!("Backed up {} records to {}", count, self.path.display()),
                        Err(e) => error!("Periodic snapshot failed: {}", e),
                    }
                }
            }
        }
    }

    /// One last snapshot before exit, abandoned after `timeout`.
    /// Returns whether the write completed.
    pub async fn final_snapshot(&self, timeout: Duration) -> bool {
        info!("Backing up directory before shutdown...");

        match tokio::time::timeout(timeout, self.snapshot_now()).await {
            Ok(Ok(count)) => {
                info!("Final snapshot wrote {} records", count);
                true
            }
            Ok(Err(e)) => {
                error!("Final snapshot failed: {}", e);
                false
            }
            Err(_) => {
                self.observer.snapshot_failed();
                error!(
                    "Final snapshot abandoned after {}s",
                    timeout.as_secs_f64()
                );
                false
            }
        }
    }
}
