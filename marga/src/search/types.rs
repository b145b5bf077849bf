//! Shortest-path search types.

use std::cmp::Ordering;

use crate::core::Point2D;
use crate::graph::{EdgeId, VertexId};

/// Priority queue entry.
///
/// Ordered for a max-heap so that the lowest cost pops first and, among equal
/// costs, the entry pushed first.
#[derive(Clone, Copy, Debug)]
pub(super) struct QueueEntry {
    pub cost: f64,
    pub seq: u64,
    pub vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices whose distance became final.
    pub settled: usize,
    /// Edges whose cost was added to a tentative distance.
    pub relaxed: usize,
    /// Edges skipped because their passability check returned false.
    pub skipped_impassable: usize,
    /// Entries pushed onto the priority queue.
    pub pushes: usize,
}

/// A route found through the visibility graph.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePath {
    /// Route points from source to target.
    pub points: Vec<Point2D>,
    /// Vertices visited, parallel to `points`.
    pub vertices: Vec<VertexId>,
    /// Edges used, one fewer than `points`.
    pub edges: Vec<EdgeId>,
    /// Total cost under the search's cost model.
    pub cost: f64,
    /// Search counters.
    pub stats: SearchStats,
}

impl RoutePath {
    /// Route that starts and ends at the same vertex.
    pub(super) fn single(point: Point2D, vertex: VertexId) -> Self {
        Self {
            points: vec![point],
            vertices: vec![vertex],
            edges: Vec::new(),
            cost: 0.0,
            stats: SearchStats::default(),
        }
    }

    /// Number of route points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the route has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point.
    pub fn start(&self) -> Option<Point2D> {
        self.points.first().copied()
    }

    /// Last point.
    pub fn end(&self) -> Option<Point2D> {
        self.points.last().copied()
    }

    /// Euclidean length of the polyline, ignoring multipliers and weights.
    pub fn polyline_length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }

    /// Consume the route, keeping only its points.
    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }
}
