//! `nav-route` — shortest-path routing and trip estimation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`router`]   | `Router` trait, `DijkstraRouter`, `PathOutcome`     |
//! | [`estimate`] | `TripEstimate` derived-metrics function             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod estimate;
pub mod router;


pub use estimate::TripEstimate;
pub use router::{DijkstraRouter, PathOutcome, PathResult, Router};
