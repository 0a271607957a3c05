//! `nav-engine` — the embedding surface of the rust_nav navigator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`navigator`] | `Navigator` facade, `TripPlan`                     |
//! | [`seed`]      | CSV seed loaders (`csv` + `serde`)                 |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                   |
//!
//! Re-exports the lower-layer types a host needs (`LocationId`,
//! `RoadStatus`, `PathOutcome`, stats), so most embedders depend on this
//! crate alone.

pub mod error;
pub mod navigator;
pub mod seed;

#[cfg(test)]
mod tests;

pub use error::{EngineError, EngineResult};
pub use navigator::{Navigator, TripPlan};
pub use seed::{
    load_locations_csv, load_locations_reader, load_roads_csv, load_roads_reader, seed_navigator,
};

// Host-facing re-exports from the lower layers.
pub use nav_core::{LocationId, RoadStatus};
pub use nav_graph::{GraphError, Location, NetworkStats, Road};
pub use nav_route::{DijkstraRouter, PathOutcome, PathResult, Router, TripEstimate};
