mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod snapshot_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use snapshot_config::SnapshotConfig;
pub use validation_config::ValidationConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "IDR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".idr";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 1099;
const MIN_PORT: u16 = 1024;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;
const MIN_SHUTDOWN_TIMEOUT_SECS: u64 = 1;
const MAX_SHUTDOWN_TIMEOUT_SECS: u64 = 300;

pub const DEFAULT_SNAPSHOT_PATH: &str = "registry.backup";
pub const DEFAULT_SNAPSHOT_INTERVAL_SECS: u64 = 120;
const MIN_SNAPSHOT_INTERVAL_SECS: u64 = 1;
const MAX_SNAPSHOT_INTERVAL_SECS: u64 = 86_400;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const VERBOSE_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
const DEFAULT_LOG_DIRECTORY: &str = "log";

pub const DEFAULT_MAX_LOGIN_NAME_LENGTH: usize = 64;
pub const DEFAULT_MAX_REAL_NAME_LENGTH: usize = 256;
const MAX_NAME_LENGTH_LIMIT: usize = 4096;
