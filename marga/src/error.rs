//! Error types for graph construction and routing.
//!
//! Construction faults (self-loops, negative costs, stale handles) indicate a
//! bug in whoever builds the graph. Search outcomes ([`RouteError::NoPathFound`],
//! [`RouteError::SearchBudgetExceeded`]) are ordinary results a caller is
//! expected to handle; [`RouteError::is_recoverable`] tells them apart.

use thiserror::Error;

use crate::core::Point2D;
use crate::graph::{EdgeId, VertexId};

/// Errors produced by the visibility graph and the shortest-path search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// Source and target of an edge are the same point.
    #[error("self-loop edges are not allowed (both ends at {point})")]
    InvalidEdge {
        /// The point both ends resolve to.
        point: Point2D,
    },

    /// Edge weight is negative or not finite.
    #[error("edge weight must be finite and non-negative, got {weight}")]
    InvalidWeight {
        /// Rejected weight.
        weight: f64,
    },

    /// Length multiplier is negative or not finite.
    #[error("length multiplier must be finite and non-negative, got {multiplier}")]
    InvalidMultiplier {
        /// Rejected multiplier.
        multiplier: f64,
    },

    /// Point has a NaN or infinite coordinate.
    #[error("point {0} has a non-finite coordinate")]
    InvalidPoint(Point2D),

    /// Vertex handle does not refer to a live vertex of this graph.
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),

    /// Edge handle does not refer to a live edge of this graph.
    #[error("unknown edge {0}")]
    UnknownEdge(EdgeId),

    /// No vertex exists at the given point.
    #[error("no vertex at {0}")]
    UnknownPoint(Point2D),

    /// A different vertex already occupies the point.
    #[error("point {0} is already occupied by another vertex")]
    PointOccupied(Point2D),

    /// Search finished without connecting source and target.
    #[error("no path from {start} to {goal}")]
    NoPathFound {
        /// Search origin.
        start: Point2D,
        /// Search destination.
        goal: Point2D,
    },

    /// Search hit its iteration budget before settling the target.
    #[error("search budget exceeded after {iterations} iterations")]
    SearchBudgetExceeded {
        /// Iterations performed.
        iterations: usize,
    },
}

impl RouteError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEdge { .. } => "INVALID_EDGE",
            Self::InvalidWeight { .. } => "INVALID_WEIGHT",
            Self::InvalidMultiplier { .. } => "INVALID_MULTIPLIER",
            Self::InvalidPoint(_) => "INVALID_POINT",
            Self::UnknownVertex(_) => "UNKNOWN_VERTEX",
            Self::UnknownEdge(_) => "UNKNOWN_EDGE",
            Self::UnknownPoint(_) => "UNKNOWN_POINT",
            Self::PointOccupied(_) => "POINT_OCCUPIED",
            Self::NoPathFound { .. } => "NO_PATH",
            Self::SearchBudgetExceeded { .. } => "BUDGET_EXCEEDED",
        }
    }

    /// True for search outcomes a caller can react to (retry, reroute);
    /// false for construction faults.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoPathFound { .. } | Self::SearchBudgetExceeded { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteError>;
