//! CSV seed loaders.
//!
//! Seed data is the embedding application's responsibility; these loaders
//! give every host the same parsing path.  Two files:
//!
//! ```csv
//! id,name
//! 1,DHA
//! 2,Sadar Bazaar
//! ```
//!
//! ```csv
//! from,to,distance_km,status
//! 1,2,8,normal
//! 2,3,6,heavy_traffic
//! ```
//!
//! Roads are undirected specs; mirroring happens in the store when the
//! seed is applied.  `status` uses the [`RoadStatus`] labels.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::{LocationId, RoadStatus};
use nav_graph::mirror::RoadSpec;
use nav_route::Router;

use crate::error::EngineError;
use crate::navigator::Navigator;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    id: u32,
    name: String,
}

#[derive(Deserialize)]
struct RoadRecord {
    from: u32,
    to: u32,
    distance_km: f64,
    status: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `(id, name)` seed locations from a CSV file.
pub fn load_locations_csv(path: &Path) -> Result<Vec<(LocationId, String)>, EngineError> {
    let file = std::fs::File::open(path).map_err(EngineError::Io)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
///
/// Useful for embedded seeds (pass a `std::io::Cursor`).
pub fn load_locations_reader<R: Read>(
    reader: R,
) -> Result<Vec<(LocationId, String)>, EngineError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut locations = Vec::new();
    for result in csv_reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| EngineError::Parse(e.to_string()))?;
        locations.push((LocationId(row.id), row.name));
    }
    Ok(locations)
}

/// Load undirected road specs from a CSV file.
pub fn load_roads_csv(path: &Path) -> Result<Vec<RoadSpec>, EngineError> {
    let file = std::fs::File::open(path).map_err(EngineError::Io)?;
    load_roads_reader(file)
}

/// Like [`load_roads_csv`] but accepts any `Read` source.
pub fn load_roads_reader<R: Read>(reader: R) -> Result<Vec<RoadSpec>, EngineError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut roads = Vec::new();
    for result in csv_reader.deserialize::<RoadRecord>() {
        let row = result.map_err(|e| EngineError::Parse(e.to_string()))?;
        let status: RoadStatus = row
            .status
            .parse()
            .map_err(|e: nav_core::NavError| EngineError::Parse(e.to_string()))?;
        roads.push(RoadSpec {
            from: LocationId(row.from),
            to: LocationId(row.to),
            distance_km: row.distance_km,
            status,
        });
    }
    Ok(roads)
}

/// Apply a full seed to `navigator`, failing fast on the first rejected
/// record (duplicate id, self-loop, bad distance, malformed CSV).
pub fn seed_navigator<Rt: Router, L: Read, Rd: Read>(
    navigator: &mut Navigator<Rt>,
    locations: L,
    roads: Rd,
) -> Result<(), EngineError> {
    for (id, name) in load_locations_reader(locations)? {
        navigator.add_location(id, name)?;
    }
    for spec in load_roads_reader(roads)? {
        navigator.add_road(spec.from, spec.to, spec.distance_km, spec.status)?;
    }
    Ok(())
}
