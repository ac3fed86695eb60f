//! Lifecycle status shared by workshops and book clubs

use serde::{Deserialize, Serialize};

/// Lifecycle status of a workshop or book club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    /// Open for new members
    #[default]
    Recruiting,
    /// Running with a settled membership (joining still allowed)
    Active,
    /// Finished; read-only from the UI's perspective
    Closed,
}

impl GroupStatus {
    /// Database/text representation
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recruiting => "recruiting",
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }

    /// Parse from the database representation (unknown values fall back to
    /// `Recruiting`)
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "closed" => Self::Closed,
            _ => Self::Recruiting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for status in [
            GroupStatus::Recruiting,
            GroupStatus::Active,
            GroupStatus::Closed,
        ] {
            assert_eq!(GroupStatus::parse(status.as_str()), status);
        }
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(GroupStatus::parse("archived"), GroupStatus::Recruiting);
    }
}
