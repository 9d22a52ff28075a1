//! Error types for malformed graph input.
//!
//! Tree operations never fail with an error value. A query for something that
//! may be absent returns an `Option` instead, so the only errors in this
//! crate come from validating caller-supplied graph representations.

use thiserror::Error;

/// A graph description that violates the representation invariants.
///
/// Both constructors validate their input up front so that the metric
/// functions can index freely without risking an out-of-bounds access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An adjacency matrix row whose width differs from the number of rows.
    #[error("adjacency matrix is not square: row {row} has {width} cells, expected {order}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        width: usize,
        /// Number of rows, which every row's width must match.
        order: usize,
    },

    /// An adjacency list entry that references a vertex outside the graph.
    #[error("vertex {vertex} lists neighbour {neighbour}, outside 0..{order}")]
    NeighbourOutOfRange {
        /// The vertex whose neighbour list is invalid.
        vertex: usize,
        /// The out-of-range neighbour id.
        neighbour: usize,
        /// Number of vertices; ids must fall in `0..order`.
        order: usize,
    },
}
