//! Error types for trestle.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`ConnectivityError`].
pub type Result<T> = std::result::Result<T, ConnectivityError>;

/// Errors that can occur while building a corner table.
///
/// Construction either succeeds completely or fails with one of these
/// variants; a partially connected table is never returned. Out-of-range
/// corner indices passed to query operations are caller bugs and panic
/// instead of surfacing here.
#[derive(Error, Debug)]
pub enum ConnectivityError {
    /// A face references a point index outside the declared point count.
    #[error("face {face} references invalid point index {point}")]
    InvalidPointIndex {
        /// The face index.
        face: usize,
        /// The invalid point index.
        point: usize,
    },

    /// A face has fewer than three distinct points (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate points)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An undirected edge is shared by more than two half-edges, or by two
    /// half-edges of identical orientation.
    #[error("edge ({p0}, {p1}) is non-manifold")]
    NonManifoldEdge {
        /// First point of the edge.
        p0: usize,
        /// Second point of the edge.
        p1: usize,
    },
}
