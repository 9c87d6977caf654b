use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which listing a GetInfo request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoKind {
    /// All login names
    Users,
    /// All record ids
    Ids,
    /// Summaries of every record
    All,
}

impl InfoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Ids => "ids",
            Self::All => "all",
        }
    }
}

impl FromStr for InfoKind {
    type Err = CoreError;

    /// Case-insensitive; `uuids` is accepted as a synonym for `ids`.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "users" => Ok(Self::Users),
            "ids" | "uuids" => Ok(Self::Ids),
            "all" => Ok(Self::All),
            _ => Err(CoreError::InvalidInfoKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for InfoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
