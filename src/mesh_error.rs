//! MeshGeodesicError: Unified error type for mesh-geodesic public APIs
//!
//! Every fallible operation in the crate (matrix construction, adjacency
//! validation, mesh assembly, invariant checks) reports through this type
//! instead of panicking or silently producing wrong distances.

use thiserror::Error;

/// Unified error type for mesh-geodesic operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshGeodesicError {
    /// Input rows do not form an `n × n` matrix.
    #[error("matrix must be square: got {rows} rows with a row of length {cols}")]
    NonSquare { rows: usize, cols: usize },
    /// Flat storage of `len` entries cannot hold an `n × n` matrix.
    #[error("{len} entries cannot form a {n}x{n} matrix")]
    LengthMismatch { n: usize, len: usize },
    /// An edge weight is negative.
    #[error("negative edge weight at ({row}, {col})")]
    NegativeWeight { row: usize, col: usize },
    /// An entry is NaN.
    #[error("NaN entry at ({row}, {col})")]
    NotANumber { row: usize, col: usize },
    /// An entry is negative infinity.
    #[error("negative infinity at ({row}, {col})")]
    NegativeInfinity { row: usize, col: usize },
    /// A diagonal entry is not zero.
    #[error("diagonal entry {index} must be zero")]
    NonZeroDiagonal { index: usize },
    /// The "no edge" placeholder is unusable (NaN, zero, negative, -inf).
    #[error("invalid sentinel: {0}")]
    InvalidSentinel(String),
    /// A vertex index does not exist in the mesh/graph.
    #[error("vertex {vertex} out of range (len = {len})")]
    VertexOutOfRange { vertex: usize, len: usize },
    /// A vertex appears twice in a subset selection.
    #[error("vertex {0} appears more than once in the subset")]
    DuplicateVertex(usize),
    /// Coordinates or other geometric input are malformed.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// A post-condition on a distance matrix does not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
