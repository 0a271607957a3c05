//! The `Navigator` facade — the narrow API presentation hosts call into.
//!
//! Mutations return `Ok` with a human-readable success notification or an
//! [`EngineError`] whose rendering is the rejection reason; hosts can show
//! either string verbatim.  Queries never mutate and always read the
//! store's live state.
//!
//! The facade owns its [`GraphStore`] outright — there is no ambient
//! global graph.  Hosts embedding it in a concurrent runtime serialize
//! access themselves (single-writer event queue or equivalent).

use log::{debug, info};

use nav_core::{LocationId, RoadStatus};
use nav_graph::{GraphStore, Location, NetworkStats, Road};
use nav_route::{DijkstraRouter, PathOutcome, PathResult, Router, TripEstimate};

use crate::error::{EngineError, EngineResult};

// ── TripPlan ──────────────────────────────────────────────────────────────────

/// A found route bundled with its derived trip metrics and display labels.
#[derive(Clone, PartialEq, Debug)]
pub struct TripPlan {
    pub result: PathResult,
    pub estimate: TripEstimate,
    /// Display label for each path entry, in path order.
    pub waypoints: Vec<String>,
}

// ── Navigator ─────────────────────────────────────────────────────────────────

/// Facade over the graph store, router, and trip estimator.
///
/// Generic over the routing implementation; defaults to
/// [`DijkstraRouter`].
pub struct Navigator<R: Router = DijkstraRouter> {
    graph: GraphStore,
    router: R,
}

impl Navigator<DijkstraRouter> {
    /// An empty navigator with the default router.
    pub fn new() -> Self {
        Self::with_router(DijkstraRouter)
    }
}

impl Default for Navigator<DijkstraRouter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Router> Navigator<R> {
    /// An empty navigator with a custom routing implementation.
    pub fn with_router(router: R) -> Self {
        Self { graph: GraphStore::new(), router }
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    pub fn add_location(
        &mut self,
        id: LocationId,
        name: impl Into<String>,
    ) -> EngineResult<&'static str> {
        self.graph.add_location(id, name)?;
        info!("added location {id}");
        Ok("Location added successfully")
    }

    pub fn delete_location(&mut self, id: LocationId) -> EngineResult<&'static str> {
        self.graph.delete_location(id);
        info!("deleted location {id} (roads cascade-deleted)");
        Ok("Location deleted successfully")
    }

    pub fn add_road(
        &mut self,
        from: LocationId,
        to: LocationId,
        distance_km: f64,
        status: RoadStatus,
    ) -> EngineResult<&'static str> {
        self.graph.add_road(from, to, distance_km, status)?;
        info!("added road {from} <-> {to}, {distance_km} km, {status}");
        Ok("Road added successfully")
    }

    pub fn delete_road(&mut self, a: LocationId, b: LocationId) -> EngineResult<&'static str> {
        self.graph.delete_road(a, b);
        info!("deleted road {a} <-> {b}");
        Ok("Road deleted successfully")
    }

    pub fn update_road_status(
        &mut self,
        a: LocationId,
        b: LocationId,
        status: RoadStatus,
    ) -> EngineResult<&'static str> {
        self.graph.update_road_status(a, b, status);
        info!("road {a} <-> {b} status set to {status}");
        Ok("Road status updated")
    }

    pub fn toggle_availability(
        &mut self,
        a: LocationId,
        b: LocationId,
    ) -> EngineResult<&'static str> {
        self.graph.toggle_availability(a, b);
        info!("road {a} <-> {b} availability toggled");
        Ok("Road availability toggled")
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Locations in insertion order, for display listings.
    pub fn locations(&self) -> &[Location] {
        self.graph.locations()
    }

    /// One record per logical connection, for display listings.
    pub fn unique_roads(&self) -> Vec<&Road> {
        self.graph.unique_roads()
    }

    /// Aggregate network composition and health figures.
    pub fn stats(&self) -> NetworkStats {
        NetworkStats::collect(&self.graph)
    }

    /// Display label for `id`: the location name, or `"ID n"` for an id
    /// not in the store.
    pub fn location_label(&self, id: LocationId) -> String {
        match self.graph.location(id) {
            Some(loc) => loc.name.clone(),
            None => format!("ID {}", id.0),
        }
    }

    /// Direct read access to the underlying store.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Minimum-cost path from `start` to `end` over the current store
    /// state.
    ///
    /// `NoPath` is a valid outcome.  The only error is the
    /// [`EngineError::SameEndpoint`] precondition: a query from a location
    /// to itself is a caller mistake, rejected before the router runs.
    pub fn find_shortest_path(
        &self,
        start: LocationId,
        end: LocationId,
    ) -> EngineResult<PathOutcome> {
        if start == end {
            return Err(EngineError::SameEndpoint(start));
        }
        let outcome = self.router.find_path(&self.graph, start, end);
        debug!(
            "path query {start} -> {end}: {}",
            match outcome.route() {
                Some(r) => format!("{} hops, {} km", r.hop_count(), r.distance_km),
                None => "no path".to_owned(),
            }
        );
        Ok(outcome)
    }

    /// Shortest path plus derived trip metrics and display labels.
    ///
    /// Returns `Ok(None)` when no route exists (the facade-level view of
    /// [`PathOutcome::NoPath`]).
    pub fn plan_trip(&self, start: LocationId, end: LocationId) -> EngineResult<Option<TripPlan>> {
        let outcome = self.find_shortest_path(start, end)?;
        Ok(outcome.route().map(|result| TripPlan {
            estimate: TripEstimate::from(result),
            waypoints: result.path.iter().map(|&id| self.location_label(id)).collect(),
            result: result.clone(),
        }))
    }
}
