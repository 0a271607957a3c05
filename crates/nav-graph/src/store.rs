//! The canonical owner of the location and road sets.
//!
//! # Invariants
//!
//! After every operation:
//!
//! 1. **Unique ids** — no two locations share a `LocationId`.
//! 2. **Mirrored pairs** — a directed record `(a → b)` exists iff `(b → a)`
//!    exists with identical distance, status, and availability.
//! 3. **No self-loops** — every record has `from != to`.
//!
//! All mutation goes through this type; the mirrored-pair bookkeeping
//! itself lives in [`crate::mirror`].  Mutations are synchronous and
//! immediately visible to subsequent reads — there is no caching layer,
//! so a router querying the store always sees the current edge set.
//!
//! # Ownership
//!
//! The store is a plain owned value with `&mut self` mutations.  Hosts that
//! embed it in a concurrent runtime are expected to serialize access (for
//! example behind a single-writer event queue); the store itself takes no
//! locks.

use nav_core::{LocationId, RoadStatus};

use crate::error::{GraphError, GraphResult};
use crate::mirror::{self, RoadSpec};
use crate::types::{Location, Road};

/// In-memory road-network store.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphStore {
    /// Locations in insertion order (preserved for display listings).
    locations: Vec<Location>,
    /// Directed road records; mirrored pairs are inserted adjacently but
    /// no ordering is relied upon anywhere.
    roads: Vec<Road>,
}

impl GraphStore {
    /// Construct an empty store with no locations or roads.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Location mutations ────────────────────────────────────────────────

    /// Insert a location with a caller-supplied id.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateId`] if `id` is already present.
    /// - [`GraphError::EmptyName`] if `name` is empty or whitespace-only.
    pub fn add_location(&mut self, id: LocationId, name: impl Into<String>) -> GraphResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GraphError::EmptyName);
        }
        if self.contains_location(id) {
            return Err(GraphError::DuplicateId(id));
        }
        self.locations.push(Location { id, name });
        Ok(())
    }

    /// Remove a location and cascade-delete every road touching it (both
    /// directions of every affected pair).
    ///
    /// Deleting an absent id is a no-op, not an error.
    pub fn delete_location(&mut self, id: LocationId) {
        self.locations.retain(|loc| loc.id != id);
        self.roads.retain(|road| !road.touches(id));
    }

    // ── Road mutations ────────────────────────────────────────────────────

    /// Insert a logical connection as its mirrored directed pair, both
    /// directions initially available.
    ///
    /// Endpoints are **not** required to reference existing locations; a
    /// record into an unknown id is inert (the router seeds its distance
    /// table from the location set only, so such a record can never appear
    /// on a path).  This preserves the observable behavior of the original
    /// system rather than adding a stricter check.
    ///
    /// # Errors
    ///
    /// - [`GraphError::SelfLoop`] if `from == to`.
    /// - [`GraphError::InvalidDistance`] if `distance_km` is not a positive
    ///   finite number.
    pub fn add_road(
        &mut self,
        from: LocationId,
        to: LocationId,
        distance_km: f64,
        status: RoadStatus,
    ) -> GraphResult<()> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !(distance_km.is_finite() && distance_km > 0.0) {
            return Err(GraphError::InvalidDistance(distance_km));
        }
        self.roads
            .extend(mirror::expand_to_pair(RoadSpec { from, to, distance_km, status }));
        Ok(())
    }

    /// Remove both directed records of the unordered pair `{a, b}`.
    /// No-op if the pair is absent.
    pub fn delete_road(&mut self, a: LocationId, b: LocationId) {
        self.roads.retain(|road| !road.joins(a, b));
    }

    /// Set the traffic status on both directions of `{a, b}` atomically.
    /// No-op if the pair is absent.
    pub fn update_road_status(&mut self, a: LocationId, b: LocationId, status: RoadStatus) {
        for road in self.roads.iter_mut().filter(|r| r.joins(a, b)) {
            road.status = status;
        }
    }

    /// Flip availability on both directions of `{a, b}` atomically.
    /// No-op if the pair is absent.
    pub fn toggle_availability(&mut self, a: LocationId, b: LocationId) {
        for road in self.roads.iter_mut().filter(|r| r.joins(a, b)) {
            road.is_available = !road.is_available;
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// All locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up one location by id.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.id == id)
    }

    pub fn contains_location(&self, id: LocationId) -> bool {
        self.location(id).is_some()
    }

    /// All directed road records.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// One record per logical connection, deduplicated on the canonical
    /// `(min, max)` endpoint pair.  Order follows the directed record set.
    pub fn unique_roads(&self) -> Vec<&Road> {
        mirror::collapse_unique(&self.roads)
    }

    /// Outgoing directed records of `id` — the router's adjacency view.
    pub fn roads_from(&self, id: LocationId) -> impl Iterator<Item = &Road> + '_ {
        self.roads.iter().filter(move |road| road.from == id)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed records (twice the number of logical connections).
    pub fn directed_road_count(&self) -> usize {
        self.roads.len()
    }

    /// Number of logical bidirectional connections.
    pub fn connection_count(&self) -> usize {
        self.unique_roads().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.roads.is_empty()
    }
}
