use idr_store::SnapshotObserver;

use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Counters and timings for directory operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "idr_service",
        }
    }

    pub fn request_received(&self, operation: &str) {
        counter!(format!("{}.requests.total", self.prefix)).increment(1);
        counter!(format!("{}.requests.{}", self.prefix, operation)).increment(1);
    }

    pub fn request_failed(&self, operation: &str, error_code: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!(
            "{}.errors.{}.{}",
            self.prefix,
            operation,
            error_code.to_ascii_lowercase()
        ))
        .increment(1);
    }

    pub fn request_latency(&self, operation: &str, duration: Duration) {
        histogram!(format!("{}.requests.{}.latency_ms", self.prefix, operation))
            .record(duration.as_secs_f64() * 1000.0);
    }

    pub fn records(&self, count: usize) {
        gauge!(format!("{}.records", self.prefix)).set(count as f64);
    }
}

impl SnapshotObserver for Metrics {
    fn snapshot_written(&self, records: usize) {
        counter!(format!("{}.snapshots.written", self.prefix)).increment(1);
        self.records(records);
    }

    fn snapshot_failed(&self) {
        counter!(format!("{}.snapshots.failed", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
