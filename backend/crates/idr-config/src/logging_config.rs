use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel, VERBOSE_LOG_LEVEL};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Raise the level to at least `debug`
    pub verbose: bool,
    /// Colored level names (stdout only)
    pub colored: bool,
    /// Log to this file instead of stdout. Relative paths resolve under `dir`.
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            verbose: false,
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    /// The level the logger should run at once `verbose` is applied
    pub fn effective_level(&self) -> LogLevel {
        if self.verbose && *self.level < VERBOSE_LOG_LEVEL {
            LogLevel(VERBOSE_LOG_LEVEL)
        } else {
            self.level
        }
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_deref().map(|file| {
            let path = Path::new(file);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                Path::new(&self.dir).join(path)
            }
        })
    }
}
