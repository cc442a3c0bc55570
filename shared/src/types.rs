//! Common types for the shared crate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Entity lifecycle status
///
/// Every catalog entity is either `Active` or `Inactive`. There are no
/// other lifecycle states (no draft, no archived).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status value
#[derive(Debug, thiserror::Error)]
#[error("invalid status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for EntityStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EntityStatus::Active),
            "Inactive" => Ok(EntityStatus::Inactive),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        assert_eq!("Active".parse::<EntityStatus>().unwrap(), EntityStatus::Active);
        assert_eq!(EntityStatus::Inactive.as_str(), "Inactive");
        assert!("archived".parse::<EntityStatus>().is_err());
    }

    #[test]
    fn status_default_is_active() {
        assert_eq!(EntityStatus::default(), EntityStatus::Active);
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let json = serde_json::to_string(&EntityStatus::Active).unwrap();
        assert_eq!(json, "\"Active\"");
    }
}
