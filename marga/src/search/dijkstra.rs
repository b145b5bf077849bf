//! Dijkstra's shortest path algorithm over the visibility graph.
//!
//! Edge costs are non-negative (lengths and weights are validated on the
//! graph), so a vertex is final once it leaves the queue. Passability checks
//! are evaluated each time an edge is relaxed; an impassable edge is treated
//! as absent for that relaxation only and the graph is never modified.

use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::config::{EdgeCost, SearchConfig, Traversal};
use crate::core::Point2D;
use crate::error::{Result, RouteError};
use crate::graph::{EdgeId, VertexId, VisibilityGraph};

use super::types::{QueueEntry, RoutePath, SearchStats};

/// Per-call search state, indexed by vertex arena slot.
struct SearchState {
    dist: Vec<f64>,
    prev: Vec<Option<EdgeId>>,
    settled: Vec<bool>,
    heap: BinaryHeap<QueueEntry>,
    seq: u64,
    stats: SearchStats,
}

impl SearchState {
    fn new(capacity: usize, start: VertexId) -> Self {
        let mut state = Self {
            dist: vec![f64::INFINITY; capacity],
            prev: vec![None; capacity],
            settled: vec![false; capacity],
            heap: BinaryHeap::new(),
            seq: 0,
            stats: SearchStats::default(),
        };
        state.dist[start.index()] = 0.0;
        state.push(start, 0.0);
        state
    }

    fn push(&mut self, vertex: VertexId, cost: f64) {
        self.heap.push(QueueEntry {
            cost,
            seq: self.seq,
            vertex,
        });
        self.seq += 1;
        self.stats.pushes += 1;
    }
}

/// Single-source shortest path search over a [`VisibilityGraph`].
///
/// The search borrows the graph immutably; run one search per graph copy, or
/// hold a read lock for the duration of a call when sharing a graph.
///
/// # Example
///
/// ```rust,ignore
/// use marga::search::ShortestPathSearch;
///
/// let search = ShortestPathSearch::with_defaults(&graph);
/// match search.find_path(start, goal) {
///     Ok(path) => println!("{} points, cost {:.2}", path.len(), path.cost),
///     Err(e) if e.is_recoverable() => println!("no route: {e}"),
///     Err(e) => return Err(e),
/// }
/// ```
pub struct ShortestPathSearch<'g> {
    graph: &'g VisibilityGraph,
    config: SearchConfig,
}

impl<'g> ShortestPathSearch<'g> {
    /// Create a search over `graph`.
    pub fn new(graph: &'g VisibilityGraph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Create with default configuration
    pub fn with_defaults(graph: &'g VisibilityGraph) -> Self {
        Self::new(graph, SearchConfig::default())
    }

    /// Search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the cheapest route between the vertices at `source` and `target`.
    ///
    /// # Errors
    /// - [`RouteError::UnknownPoint`] if either point has no vertex
    /// - [`RouteError::NoPathFound`] if no traversable route exists
    /// - [`RouteError::SearchBudgetExceeded`] if the iteration budget ran out
    pub fn find_path(&self, source: Point2D, target: Point2D) -> Result<RoutePath> {
        let start = self
            .graph
            .find_vertex(source)
            .ok_or(RouteError::UnknownPoint(source))?;
        let goal = self
            .graph
            .find_vertex(target)
            .ok_or(RouteError::UnknownPoint(target))?;
        self.find_path_between(start, goal)
    }

    /// [`find_path`](Self::find_path) for vertex handles.
    pub fn find_path_between(&self, start: VertexId, goal: VertexId) -> Result<RoutePath> {
        let source = self
            .graph
            .point(start)
            .ok_or(RouteError::UnknownVertex(start))?;
        let target = self
            .graph
            .point(goal)
            .ok_or(RouteError::UnknownVertex(goal))?;

        trace!(
            "[Dijkstra] find_path: start={} goal={} cost={:?} traversal={:?}",
            source, target, self.config.cost, self.config.traversal
        );

        if start == goal {
            return Ok(RoutePath::single(source, start));
        }

        let mut state = SearchState::new(self.graph.vertex_capacity(), start);
        self.run(&mut state, Some(goal))?;

        if !state.settled[goal.index()] {
            debug!(
                "[Dijkstra] FAILED: NoPath from {} to {} after settling {} vertices ({} impassable edges skipped)",
                source, target, state.stats.settled, state.stats.skipped_impassable
            );
            return Err(RouteError::NoPathFound {
                start: source,
                goal: target,
            });
        }

        let path = self.reconstruct(&state, start, goal, source, target)?;
        trace!(
            "[Dijkstra] SUCCESS: {} points, cost={:.4}, settled={}, relaxed={}",
            path.len(),
            path.cost,
            state.stats.settled,
            state.stats.relaxed
        );
        Ok(path)
    }

    /// Cheapest cost from `source` to every reachable vertex.
    ///
    /// Runs until the queue is exhausted; unreachable vertices are absent from
    /// the map. The source maps to `0.0`.
    pub fn distances_from(&self, source: Point2D) -> Result<HashMap<VertexId, f64>> {
        let start = self
            .graph
            .find_vertex(source)
            .ok_or(RouteError::UnknownPoint(source))?;

        let mut state = SearchState::new(self.graph.vertex_capacity(), start);
        self.run(&mut state, None)?;

        trace!(
            "[Dijkstra] distances_from {}: reached {} vertices",
            source, state.stats.settled
        );

        Ok(state
            .settled
            .iter()
            .enumerate()
            .filter(|&(_, &settled)| settled)
            .map(|(i, _)| (VertexId(i), state.dist[i]))
            .collect())
    }

    /// Settle vertices until `goal` is settled or the queue runs dry.
    fn run(&self, state: &mut SearchState, goal: Option<VertexId>) -> Result<()> {
        while let Some(QueueEntry { cost, vertex, .. }) = state.heap.pop() {
            let idx = vertex.index();
            // Stale entry
            if state.settled[idx] || cost > state.dist[idx] {
                continue;
            }

            if self
                .config
                .max_iterations
                .is_some_and(|max| state.stats.settled >= max)
            {
                debug!(
                    "[Dijkstra] FAILED: SearchBudgetExceeded ({} vertices settled)",
                    state.stats.settled
                );
                return Err(RouteError::SearchBudgetExceeded {
                    iterations: state.stats.settled,
                });
            }

            state.settled[idx] = true;
            state.stats.settled += 1;

            if goal == Some(vertex) {
                break;
            }

            self.relax_neighbors(state, vertex);
        }
        Ok(())
    }

    fn relax_neighbors(&self, state: &mut SearchState, vertex: VertexId) {
        let Some(v) = self.graph.vertex(vertex) else {
            return;
        };

        for &edge in v.out_edges() {
            self.relax(state, vertex, edge);
        }
        if self.config.traversal == Traversal::Undirected {
            for &edge in v.in_edges() {
                self.relax(state, vertex, edge);
            }
        }
    }

    fn relax(&self, state: &mut SearchState, from: VertexId, edge: EdgeId) {
        let Some(view) = self.graph.edge_view(edge) else {
            return;
        };
        let Some(next) = view.edge().opposite(from) else {
            return;
        };
        if state.settled[next.index()] {
            return;
        }

        if !view.is_traversable() {
            state.stats.skipped_impassable += 1;
            return;
        }

        let step = match self.config.cost {
            EdgeCost::Length => view.length(),
            EdgeCost::Weight => view.weight(),
        };
        let candidate = state.dist[from.index()] + step;
        state.stats.relaxed += 1;

        // Strict comparison: the first path found at a given cost is kept
        if candidate < state.dist[next.index()] {
            state.dist[next.index()] = candidate;
            state.prev[next.index()] = Some(edge);
            state.push(next, candidate);
        }
    }

    /// Walk predecessor edges back from `goal`.
    fn reconstruct(
        &self,
        state: &SearchState,
        start: VertexId,
        goal: VertexId,
        source: Point2D,
        target: Point2D,
    ) -> Result<RoutePath> {
        let broken = || RouteError::NoPathFound {
            start: source,
            goal: target,
        };

        let mut vertices = vec![goal];
        let mut edges = Vec::new();
        let mut current = goal;

        while current != start {
            let edge = state.prev[current.index()].ok_or_else(broken)?;
            current = self
                .graph
                .edge(edge)
                .and_then(|e| e.opposite(current))
                .ok_or_else(broken)?;
            edges.push(edge);
            vertices.push(current);
        }
        vertices.reverse();
        edges.reverse();

        let points = vertices
            .iter()
            .map(|&v| self.graph.point(v).ok_or(RouteError::UnknownVertex(v)))
            .collect::<Result<Vec<_>>>()?;

        Ok(RoutePath {
            points,
            vertices,
            edges,
            cost: state.dist[goal.index()],
            stats: state.stats,
        })
    }
}
