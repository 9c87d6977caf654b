use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SNAPSHOT_INTERVAL_SECS, DEFAULT_SNAPSHOT_PATH,
    MAX_SNAPSHOT_INTERVAL_SECS, MIN_SNAPSHOT_INTERVAL_SECS,
};

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Snapshot file. Relative paths resolve against the working directory.
    pub path: String,
    pub interval_secs: u64,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_SNAPSHOT_PATH),
            interval_secs: DEFAULT_SNAPSHOT_INTERVAL_SECS,
        }
    }
}

impl SnapshotConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::snapshot("snapshot.path must not be empty"));
        }

        if !(MIN_SNAPSHOT_INTERVAL_SECS..=MAX_SNAPSHOT_INTERVAL_SECS).contains(&self.interval_secs)
        {
            return Err(ConfigError::snapshot(format!(
                "snapshot.interval_secs must be {}-{}, got {}",
                MIN_SNAPSHOT_INTERVAL_SECS, MAX_SNAPSHOT_INTERVAL_SECS, self.interval_secs
            )));
        }

        Ok(())
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
