//! Strongly typed, zero-cost identifier wrappers.
//!
//! Location ids are **caller-supplied**, not auto-generated: the embedding
//! application picks them (the seed network uses 1–10) and the store
//! enforces uniqueness at insertion.  The inner integer is `pub` so hosts
//! can construct ids from form input without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the inner max.
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a location (graph node).  Unique within one store.
    pub struct LocationId(u32);
}

impl LocationId {
    /// Canonical unordered-pair key for a road between `a` and `b`.
    ///
    /// Both directed records of a mirrored pair map to the same
    /// `(min, max)` tuple, which makes unordered matching and
    /// deduplication order-independent.
    #[inline]
    pub fn canonical_pair(a: LocationId, b: LocationId) -> (LocationId, LocationId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}
