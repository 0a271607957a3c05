//! Traffic status enum shared across all road-related crates.

use std::fmt;
use std::str::FromStr;

use crate::NavError;

/// Traffic condition of a road.
///
/// The status set is closed: routing cost policy (`nav-route`) matches
/// exhaustively on it, so adding a variant is a semver-breaking change on
/// purpose.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadStatus {
    /// Free-flowing traffic (default for new roads).
    #[default]
    Normal,
    /// Congested; traversal cost is scaled up by the router.
    HeavyTraffic,
    /// Impassable; excluded from routing entirely.
    Blocked,
}

impl RoadStatus {
    /// `false` only for [`RoadStatus::Blocked`].
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, RoadStatus::Blocked)
    }

    /// Human-readable label, useful for CSV column values and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            RoadStatus::Normal => "normal",
            RoadStatus::HeavyTraffic => "heavy_traffic",
            RoadStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for RoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoadStatus {
    type Err = NavError;

    /// Parse the labels produced by [`RoadStatus::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(RoadStatus::Normal),
            "heavy_traffic" => Ok(RoadStatus::HeavyTraffic),
            "blocked" => Ok(RoadStatus::Blocked),
            other => Err(NavError::Parse(format!(
                "invalid road status {other:?}: expected \"normal\", \"heavy_traffic\", or \"blocked\""
            ))),
        }
    }
}
