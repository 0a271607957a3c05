//! `nav-graph` — the mutable road-network graph store.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`types`]  | `Location`, `Road` (one directed record)                 |
//! | [`store`]  | `GraphStore` — owns both sets, enforces the invariants   |
//! | [`mirror`] | Mirrored-pair expand/collapse policy                     |
//! | [`stats`]  | `NetworkStats` reporting snapshot                        |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod mirror;
pub mod stats;
pub mod store;
pub mod types;


pub use error::{GraphError, GraphResult};
pub use stats::NetworkStats;
pub use store::GraphStore;
pub use types::{Location, Road};
