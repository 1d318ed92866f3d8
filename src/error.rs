use thiserror::Error;

/// Top-level error type for the measurement kernel.
#[derive(Debug, Error)]
pub enum CalipersError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Measure(#[from] MeasureError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topological operations.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to CAD operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised while resolving selected sub-shapes for measurement.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("edge has no usable extent: {0}")]
    DegenerateEdge(String),

    #[error("discretization produced no points")]
    EmptyDiscretization,
}

/// Convenience type alias for results using [`CalipersError`].
pub type Result<T> = std::result::Result<T, CalipersError>;
