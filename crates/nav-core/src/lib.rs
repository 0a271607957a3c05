//! `nav-core` — foundational types for the `rust_nav` road-network navigator.
//!
//! This crate is a dependency of every other `nav-*` crate.  It
//! intentionally has no `nav-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                          |
//! |------------|-----------------------------------|
//! | [`ids`]    | `LocationId`                      |
//! | [`status`] | `RoadStatus` enum                 |
//! | [`error`]  | `NavError`, `NavResult`           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod status;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use ids::LocationId;
pub use status::RoadStatus;
