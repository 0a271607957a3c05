//! Aggregate network statistics for reporting surfaces.
//!
//! All road figures count **logical connections** (deduplicated mirrored
//! pairs), not directed records — a blocked road is one blocked road, not
//! two.

use nav_core::RoadStatus;

use crate::store::GraphStore;

/// Snapshot of network composition and health.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStats {
    pub locations: usize,
    /// Logical bidirectional connections.
    pub connections: usize,
    pub available: usize,
    pub normal: usize,
    pub heavy_traffic: usize,
    pub blocked: usize,
}

impl NetworkStats {
    /// Compute statistics over the store's current state.
    pub fn collect(store: &GraphStore) -> Self {
        let unique = store.unique_roads();
        let mut stats = NetworkStats {
            locations: store.location_count(),
            connections: unique.len(),
            ..Default::default()
        };
        for road in unique {
            if road.is_available {
                stats.available += 1;
            }
            match road.status {
                RoadStatus::Normal => stats.normal += 1,
                RoadStatus::HeavyTraffic => stats.heavy_traffic += 1,
                RoadStatus::Blocked => stats.blocked += 1,
            }
        }
        stats
    }

    /// Share of connections currently available, as a rounded integer
    /// percentage.  `0` for an empty network.
    pub fn availability_pct(&self) -> u32 {
        Self::pct(self.available, self.connections)
    }

    /// Share of connections with free-flowing traffic, as a rounded integer
    /// percentage.  `0` for an empty network.
    pub fn normal_pct(&self) -> u32 {
        Self::pct(self.normal, self.connections)
    }

    fn pct(part: usize, whole: usize) -> u32 {
        if whole == 0 {
            return 0;
        }
        (part as f64 / whole as f64 * 100.0).round() as u32
    }
}
