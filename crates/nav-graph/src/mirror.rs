//! Mirrored-pair policy: one logical connection = two directed records.
//!
//! Every bug class in the ancestor of this design (stale reverse edges,
//! status drifting between directions) came from mutating one direction
//! without the other.  This module owns the expand/collapse mapping so the
//! store's operations never touch directionality by hand:
//!
//! - [`expand_to_pair`] turns one road specification into its two directed
//!   records.
//! - [`collapse_unique`] reduces the directed record set back to one record
//!   per logical connection, keyed on the canonical `(min, max)` endpoint
//!   pair.  The first record encountered per key wins, which makes the
//!   result independent of how the mirrored pairs happen to be ordered.

use rustc_hash::FxHashSet;

use nav_core::{LocationId, RoadStatus};

use crate::types::Road;

/// Specification of one logical bidirectional connection, as supplied by a
/// caller of [`GraphStore::add_road`].
///
/// [`GraphStore::add_road`]: crate::GraphStore::add_road
#[derive(Copy, Clone, Debug)]
pub struct RoadSpec {
    pub from: LocationId,
    pub to: LocationId,
    pub distance_km: f64,
    pub status: RoadStatus,
}

/// Expand a road specification into its mirrored directed pair.
///
/// Both records carry identical attributes and start out available.
pub fn expand_to_pair(spec: RoadSpec) -> [Road; 2] {
    let forward = Road {
        from: spec.from,
        to: spec.to,
        distance_km: spec.distance_km,
        status: spec.status,
        is_available: true,
    };
    let reverse = Road { from: spec.to, to: spec.from, ..forward };
    [forward, reverse]
}

/// Collapse directed records down to one per logical connection.
///
/// Keeps the first record seen for each canonical endpoint pair, in input
/// order.  Self-loops cannot occur in a store (rejected at insertion), but
/// a degenerate input record would simply dedup against itself.
pub fn collapse_unique(roads: &[Road]) -> Vec<&Road> {
    let mut seen: FxHashSet<(LocationId, LocationId)> =
        FxHashSet::with_capacity_and_hasher(roads.len() / 2 + 1, Default::default());
    roads
        .iter()
        .filter(|road| seen.insert(road.canonical_key()))
        .collect()
}
