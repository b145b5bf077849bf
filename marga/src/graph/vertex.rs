//! Vertices of the visibility graph.

use std::fmt;

use crate::core::Point2D;

use super::edge::EdgeId;

/// Handle to a vertex inside a [`VisibilityGraph`](super::VisibilityGraph).
///
/// Handles are stable for the lifetime of the graph and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Arena index of this vertex.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A graph node wrapping a point: an obstacle corner or a route terminal.
///
/// The vertex owns its incident edge lists. Edges attached with this vertex
/// as their source are listed in [`out_edges`](Self::out_edges), edges ending
/// here in [`in_edges`](Self::in_edges), both in insertion order.
#[derive(Clone, Debug)]
pub struct VisibilityVertex {
    id: VertexId,
    point: Point2D,
    pub(crate) out_edges: Vec<EdgeId>,
    pub(crate) in_edges: Vec<EdgeId>,
}

impl VisibilityVertex {
    pub(crate) fn new(id: VertexId, point: Point2D) -> Self {
        Self {
            id,
            point,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    /// Handle of this vertex.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Location of this vertex.
    #[inline]
    pub fn point(&self) -> Point2D {
        self.point
    }

    /// Edges leaving this vertex.
    #[inline]
    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }

    /// Edges arriving at this vertex.
    #[inline]
    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    /// Number of incident edges in both directions.
    #[inline]
    pub fn degree(&self) -> usize {
        self.out_edges.len() + self.in_edges.len()
    }

    /// True if no edge touches this vertex.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.out_edges.is_empty() && self.in_edges.is_empty()
    }

    pub(crate) fn set_point(&mut self, point: Point2D) {
        self.point = point;
    }

    /// Drop `edge` from both incident lists.
    pub(crate) fn detach(&mut self, edge: EdgeId) {
        self.out_edges.retain(|&e| e != edge);
        self.in_edges.retain(|&e| e != edge);
    }

    pub(crate) fn clear_edges(&mut self) {
        self.out_edges.clear();
        self.in_edges.clear();
    }
}

impl fmt::Display for VisibilityVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.point)
    }
}
