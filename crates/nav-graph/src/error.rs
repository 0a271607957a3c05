//! Graph-store error type.
//!
//! Every variant is recoverable and leaves the store untouched; the
//! rendered messages double as the user-facing rejection reasons surfaced
//! by `nav-engine`.

use thiserror::Error;

use nav_core::LocationId;

/// Errors produced by [`GraphStore`](crate::GraphStore) mutations.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("location id {0} already exists")]
    DuplicateId(LocationId),

    #[error("cannot create a road from {0} to itself")]
    SelfLoop(LocationId),

    #[error("location name must not be empty")]
    EmptyName,

    #[error("road distance must be positive, got {0} km")]
    InvalidDistance(f64),
}

pub type GraphResult<T> = Result<T, GraphError>;
