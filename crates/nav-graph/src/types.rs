//! Graph element types: locations and directed road records.

use nav_core::{LocationId, RoadStatus};

// ── Location ──────────────────────────────────────────────────────────────────

/// A graph node: a uniquely identified, named place.
///
/// Ids are caller-supplied; [`GraphStore::add_location`] enforces
/// uniqueness and a non-empty name.
///
/// [`GraphStore::add_location`]: crate::GraphStore::add_location
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// One **directed** road record.
///
/// A logical bidirectional connection is stored as two mirrored directed
/// records with identical attributes; the store mutates them together and
/// never lets them drift apart (see [`crate::mirror`]).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub from: LocationId,
    pub to: LocationId,
    /// Physical length in kilometres.  Always positive.
    pub distance_km: f64,
    pub status: RoadStatus,
    pub is_available: bool,
}

impl Road {
    /// Canonical `(min, max)` key of the unordered endpoint pair.  Both
    /// records of a mirrored pair share the same key.
    #[inline]
    pub fn canonical_key(&self) -> (LocationId, LocationId) {
        LocationId::canonical_pair(self.from, self.to)
    }

    /// `true` if the unordered pair `{a, b}` matches this record's endpoints.
    #[inline]
    pub fn joins(&self, a: LocationId, b: LocationId) -> bool {
        self.canonical_key() == LocationId::canonical_pair(a, b)
    }

    /// `true` if a route may traverse this record: it is available and not
    /// blocked.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_available && self.status.is_passable()
    }

    /// `true` if either endpoint is `id`.
    #[inline]
    pub fn touches(&self, id: LocationId) -> bool {
        self.from == id || self.to == id
    }
}
