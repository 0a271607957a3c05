//! Routing trait and the default traffic-weighted Dijkstra implementation.
//!
//! # Pluggability
//!
//! Hosts call routing via the [`Router`] trait, so a custom implementation
//! (A*, bidirectional search, congestion models) can replace the default
//! [`DijkstraRouter`] without touching the rest of the stack.
//!
//! # Cost model
//!
//! Edge traversal cost is `distance_km * multiplier(status)`:
//!
//! | Status         | Multiplier        |
//! |----------------|-------------------|
//! | `Normal`       | 1.0               |
//! | `HeavyTraffic` | 1.5               |
//! | `Blocked`      | excluded entirely |
//!
//! Unavailable roads are likewise excluded.  The reported total is the
//! weighted cost rounded half-up to the nearest whole kilometre.
//!
//! # Determinism
//!
//! The unvisited scan walks location ids in ascending order and selects
//! the first strictly-smaller distance, so among equal minima the lowest
//! id always wins.  Query results are therefore reproducible regardless
//! of insertion history.

use std::collections::{BTreeMap, BTreeSet};

use nav_core::{LocationId, RoadStatus};
use nav_graph::{GraphStore, Road};

// ── Query outcome ─────────────────────────────────────────────────────────────

/// A successful routing query: the visited location sequence and the total
/// weighted cost.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Location ids from start to destination inclusive.
    pub path: Vec<LocationId>,
    /// Total weighted cost, rounded half-up to whole kilometres.
    pub distance_km: u32,
}

impl PathResult {
    /// Number of roads traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// The outcome of a shortest-path query.
///
/// `NoPath` is a valid answer, not an error: it reports that the
/// destination is unreachable under the current availability and blocking
/// constraints (or that an endpoint id is not in the store).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOutcome {
    Route(PathResult),
    NoPath,
}

impl PathOutcome {
    pub fn is_no_path(&self) -> bool {
        matches!(self, PathOutcome::NoPath)
    }

    /// The route, if one was found.
    pub fn route(&self) -> Option<&PathResult> {
        match self {
            PathOutcome::Route(result) => Some(result),
            PathOutcome::NoPath => None,
        }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must read the store live on every call — roads can be
/// mutated between queries, and the contract is that a query always
/// reflects the store's current state.
pub trait Router {
    /// Compute the minimum-cost path from `start` to `end`.
    ///
    /// `start == end` yields the trivial single-location route with
    /// distance 0; callers that consider that a precondition violation
    /// should reject it before querying (as the `nav-engine` surface does).
    fn find_path(&self, graph: &GraphStore, start: LocationId, end: LocationId) -> PathOutcome;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the store's directed record set.
///
/// The implementation favors a plain ascending-id scan over a binary heap:
/// costs are floating-point kilometres (no total order without wrappers)
/// and graphs in this domain are small, so the O(V²) scan buys fully
/// deterministic tie-breaking for free.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn find_path(&self, graph: &GraphStore, start: LocationId, end: LocationId) -> PathOutcome {
        dijkstra(graph, start, end)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Weighted traversal cost of one directed record, or `None` if the record
/// must not be traversed (unavailable or blocked).
#[inline]
fn edge_cost_km(road: &Road) -> Option<f64> {
    if !road.is_open() {
        return None;
    }
    let multiplier = match road.status {
        RoadStatus::Normal => 1.0,
        RoadStatus::HeavyTraffic => 1.5,
        // Unreachable past is_open(); kept explicit so the match stays
        // exhaustive if the status set ever grows.
        RoadStatus::Blocked => return None,
    };
    Some(road.distance_km * multiplier)
}

fn dijkstra(graph: &GraphStore, start: LocationId, end: LocationId) -> PathOutcome {
    // The distance table is seeded from the stored location set only.  An
    // unknown start or end therefore has no entry and the query degenerates
    // to "unreachable"; likewise a road into an unknown id can never relax
    // anything.
    let mut dist: BTreeMap<LocationId, f64> = graph
        .locations()
        .iter()
        .map(|loc| (loc.id, f64::INFINITY))
        .collect();
    let mut prev: BTreeMap<LocationId, LocationId> = BTreeMap::new();
    let mut unvisited: BTreeSet<LocationId> = dist.keys().copied().collect();

    if !dist.contains_key(&end) {
        return PathOutcome::NoPath;
    }
    match dist.get_mut(&start) {
        Some(d) => *d = 0.0,
        None => return PathOutcome::NoPath,
    }

    loop {
        // Ascending-id scan; strict `<` keeps the lowest id among ties.
        let mut current = None;
        let mut best = f64::INFINITY;
        for &id in &unvisited {
            let d = dist[&id];
            if d < best {
                best = d;
                current = Some(id);
            }
        }

        // Every remaining unvisited location is unreachable.
        let Some(current) = current else { break };
        // Destination selected as the minimum: its distance is final.
        if current == end {
            break;
        }
        unvisited.remove(&current);

        for road in graph.roads_from(current) {
            let Some(cost) = edge_cost_km(road) else { continue };
            let alt = best + cost;
            if let Some(d) = dist.get_mut(&road.to) {
                if alt < *d {
                    *d = alt;
                    prev.insert(road.to, current);
                }
            }
        }
    }

    let total = dist[&end];
    if !total.is_finite() {
        return PathOutcome::NoPath;
    }

    // Trace predecessors back from the destination.
    let mut path = vec![end];
    let mut cursor = end;
    while let Some(&p) = prev.get(&cursor) {
        path.push(p);
        cursor = p;
    }
    path.reverse();

    PathOutcome::Route(PathResult {
        path,
        // Half-up on a non-negative total == round-half-away-from-zero.
        distance_km: total.round() as u32,
    })
}
