//! Engine-surface error type.

use thiserror::Error;

use nav_core::LocationId;
use nav_graph::GraphError;

/// Errors surfaced by the [`Navigator`](crate::Navigator) facade.
///
/// Rendered messages are suitable for direct display as host-UI
/// notifications.  Note that an unreachable route is **not** an error —
/// it is reported as [`PathOutcome::NoPath`](nav_route::PathOutcome).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Path query precondition: start and destination must differ.
    #[error("start and destination cannot be the same location ({0})")]
    SameEndpoint(LocationId),

    /// A store mutation was rejected; the reason string comes verbatim
    /// from the graph layer.
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("seed parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
