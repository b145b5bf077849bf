//! Visibility graph container.
//!
//! Vertices and edges live in arenas indexed by [`VertexId`] / [`EdgeId`].
//! Removal leaves a tombstone so handles held elsewhere stay unambiguous.
//! A point index gives average O(1) lookup of the vertex at a point.

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::core::{Point2D, PointKey};
use crate::error::{Result, RouteError};

use super::edge::{DEFAULT_WEIGHT, EdgeId, VisibilityEdge, check_weight, format_weight};
use super::passability::Passability;
use super::vertex::{VertexId, VisibilityVertex};

/// Graph of obstacle corners and terminals joined by line-of-sight edges.
///
/// # Example
///
/// ```rust,ignore
/// use marga::graph::VisibilityGraph;
/// use marga::core::Point2D;
///
/// let mut graph = VisibilityGraph::new();
/// let a = Point2D::new(0.0, 0.0);
/// let b = Point2D::new(3.0, 4.0);
///
/// let edge = graph.add_distance_edge(a, b)?;
/// assert_eq!(graph.edge_length(edge), Some(5.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct VisibilityGraph {
    /// Vertex arena, `None` for removed vertices.
    vertices: Vec<Option<VisibilityVertex>>,

    /// Point -> live vertex.
    point_index: HashMap<PointKey, VertexId>,

    /// Edge arena, `None` for removed edges.
    edges: Vec<Option<VisibilityEdge>>,

    /// Live edge count.
    edge_count: usize,
}

impl VisibilityGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for the given number of elements.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            point_index: HashMap::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            edge_count: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Vertices
    // ─────────────────────────────────────────────────────────────────────

    /// Vertex at `point`, if any.
    #[inline]
    pub fn find_vertex(&self, point: Point2D) -> Option<VertexId> {
        self.point_index.get(&point.key()).copied()
    }

    /// Vertex at `point`, created if missing. Calling it again with the same
    /// point returns the same handle.
    ///
    /// # Errors
    /// [`RouteError::InvalidPoint`] if a coordinate is NaN or infinite.
    pub fn find_or_add_vertex(&mut self, point: Point2D) -> Result<VertexId> {
        let point = check_point(point)?;
        if let Some(id) = self.find_vertex(point) {
            return Ok(id);
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Some(VisibilityVertex::new(id, point)));
        self.point_index.insert(point.key(), id);
        trace!("[VisibilityGraph] added vertex {} at {}", id, point);
        Ok(id)
    }

    /// Live vertex for a handle.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&VisibilityVertex> {
        self.vertices.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut VisibilityVertex> {
        self.vertices.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Point of a live vertex.
    #[inline]
    pub fn point(&self, id: VertexId) -> Option<Point2D> {
        self.vertex(id).map(VisibilityVertex::point)
    }

    /// Iterate over live vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = &VisibilityVertex> {
        self.vertices.iter().flatten()
    }

    /// Number of live vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.point_index.len()
    }

    /// Size of the vertex arena, an upper bound on every live [`VertexId::index`].
    #[inline]
    pub fn vertex_capacity(&self) -> usize {
        self.vertices.len()
    }

    /// Remove the vertex at `point` together with every incident edge.
    pub fn remove_vertex(&mut self, point: Point2D) -> Option<VisibilityVertex> {
        let id = self.find_vertex(point)?;
        let incident: Vec<EdgeId> = self
            .vertex(id)
            .map(|v| v.out_edges.iter().chain(&v.in_edges).copied().collect())
            .unwrap_or_default();

        for edge in incident {
            self.remove_edge(edge);
        }

        self.point_index.remove(&point.key());
        let removed = self.vertices.get_mut(id.0).and_then(Option::take);
        debug!("[VisibilityGraph] removed vertex {} at {}", id, point);
        removed
    }

    /// Drop every vertex with no incident edges. Returns how many were removed.
    pub fn prune_isolated_vertices(&mut self) -> usize {
        let mut pruned = 0;
        for slot in &mut self.vertices {
            if let Some(vertex) = slot.take_if(|v| v.is_isolated()) {
                self.point_index.remove(&vertex.point().key());
                pruned += 1;
            }
        }

        if pruned > 0 {
            debug!("[VisibilityGraph] pruned {} isolated vertices", pruned);
        }
        pruned
    }

    /// Move the vertex at `from` to `to`. Incident edges follow; their lengths
    /// reflect the new position on the next query.
    ///
    /// # Errors
    /// [`RouteError::UnknownPoint`] if no vertex is at `from`,
    /// [`RouteError::InvalidPoint`] if `to` is not finite,
    /// [`RouteError::PointOccupied`] if another vertex is at `to`.
    pub fn relocate_vertex(&mut self, from: Point2D, to: Point2D) -> Result<VertexId> {
        let id = self.find_vertex(from).ok_or(RouteError::UnknownPoint(from))?;
        let to = check_point(to)?;
        if from == to {
            return Ok(id);
        }
        if self.point_index.contains_key(&to.key()) {
            return Err(RouteError::PointOccupied(to));
        }

        self.point_index.remove(&from.key());
        self.point_index.insert(to.key(), id);
        if let Some(vertex) = self.vertex_mut(id) {
            vertex.set_point(to);
        }
        trace!("[VisibilityGraph] relocated {} from {} to {}", id, from, to);
        Ok(id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Edges
    // ─────────────────────────────────────────────────────────────────────

    /// Connect `source` to `target` with the given weight, creating missing
    /// endpoint vertices.
    ///
    /// # Errors
    /// [`RouteError::InvalidPoint`] if either point is not finite,
    /// [`RouteError::InvalidEdge`] if the points are equal and
    /// [`RouteError::InvalidWeight`] for a negative or non-finite weight. In
    /// every case the graph is left untouched.
    pub fn add_edge(&mut self, source: Point2D, target: Point2D, weight: f64) -> Result<EdgeId> {
        let source = check_point(source)?;
        let target = check_point(target)?;
        if source == target {
            return Err(RouteError::InvalidEdge { point: source });
        }
        let weight = check_weight(weight)?;

        let s = self.find_or_add_vertex(source)?;
        let t = self.find_or_add_vertex(target)?;
        Ok(self.attach(VisibilityEdge::from_parts(s, t, weight)))
    }

    /// [`add_edge`](Self::add_edge) with [`DEFAULT_WEIGHT`].
    pub fn add_edge_between(&mut self, source: Point2D, target: Point2D) -> Result<EdgeId> {
        self.add_edge(source, target, DEFAULT_WEIGHT)
    }

    /// [`add_edge`](Self::add_edge) weighted by the Euclidean distance
    /// between the points.
    pub fn add_distance_edge(&mut self, source: Point2D, target: Point2D) -> Result<EdgeId> {
        self.add_edge(source, target, source.distance(&target))
    }

    /// Register a pre-built edge.
    ///
    /// The edge's handles must come from this graph. Handles are plain arena
    /// indices, so an edge built against another graph is only rejected when
    /// its indices are not live here; otherwise it connects whatever vertices
    /// hold those indices.
    ///
    /// # Errors
    /// [`RouteError::UnknownVertex`] if an endpoint index is not a live vertex,
    /// [`RouteError::InvalidEdge`] if both ends are the same vertex.
    pub fn insert_edge(&mut self, edge: VisibilityEdge) -> Result<EdgeId> {
        let source = self
            .vertex(edge.source())
            .ok_or(RouteError::UnknownVertex(edge.source()))?;
        if self.vertex(edge.target()).is_none() {
            return Err(RouteError::UnknownVertex(edge.target()));
        }
        if edge.source() == edge.target() {
            return Err(RouteError::InvalidEdge {
                point: source.point(),
            });
        }
        Ok(self.attach(edge))
    }

    /// Insert the [`clone_topology`](VisibilityEdge::clone_topology) twin of
    /// an edge.
    pub fn clone_edge(&mut self, id: EdgeId) -> Result<EdgeId> {
        let twin = self
            .edge(id)
            .ok_or(RouteError::UnknownEdge(id))?
            .clone_topology();
        self.insert_edge(twin)
    }

    /// Insert the [`reversed_clone`](VisibilityEdge::reversed_clone) of an
    /// edge, offering travel in the opposite direction.
    pub fn add_reversed_clone(&mut self, id: EdgeId) -> Result<EdgeId> {
        let twin = self
            .edge(id)
            .ok_or(RouteError::UnknownEdge(id))?
            .reversed_clone();
        self.insert_edge(twin)
    }

    /// Endpoints are live and distinct.
    fn attach(&mut self, edge: VisibilityEdge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let (source, target) = (edge.source(), edge.target());

        self.edges.push(Some(edge));
        self.edge_count += 1;

        if let Some(v) = self.vertex_mut(source) {
            v.out_edges.push(id);
        }
        if let Some(v) = self.vertex_mut(target) {
            v.in_edges.push(id);
        }
        id
    }

    /// Live edge for a handle.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&VisibilityEdge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut VisibilityEdge> {
        self.edges.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Edge together with the graph, for point-dependent queries.
    pub fn edge_view(&self, id: EdgeId) -> Option<EdgeView<'_>> {
        let edge = self.edge(id)?;
        let source = self.vertex(edge.source())?;
        let target = self.vertex(edge.target())?;
        Some(EdgeView {
            id,
            edge,
            source,
            target,
        })
    }

    /// Iterate over live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &VisibilityEdge)> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EdgeId(i), e)))
    }

    /// Iterate over views of live edges in insertion order.
    pub fn edge_views(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.edges().filter_map(|(id, _)| self.edge_view(id))
    }

    /// Number of live edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_index.is_empty()
    }

    /// First edge directed from `source` to `target`.
    pub fn find_edge(&self, source: Point2D, target: Point2D) -> Option<EdgeId> {
        let s = self.find_vertex(source)?;
        let t = self.find_vertex(target)?;
        self.vertex(s)?
            .out_edges()
            .iter()
            .copied()
            .find(|&e| self.edge(e).is_some_and(|edge| edge.target() == t))
    }

    /// Routing length of an edge: endpoint distance times its multiplier.
    pub fn edge_length(&self, id: EdgeId) -> Option<f64> {
        self.edge_view(id).map(|view| view.length())
    }

    /// Detach an edge from both endpoints. Endpoints stay in the graph even if
    /// this leaves them isolated.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<VisibilityEdge> {
        let edge = self.edges.get_mut(id.0)?.take()?;
        self.edge_count -= 1;

        if let Some(v) = self.vertex_mut(edge.source()) {
            v.detach(id);
        }
        if let Some(v) = self.vertex_mut(edge.target()) {
            v.detach(id);
        }
        trace!("[VisibilityGraph] removed edge {}", id);
        Some(edge)
    }

    /// Remove the first edge directed from `source` to `target`.
    pub fn remove_edge_between(
        &mut self,
        source: Point2D,
        target: Point2D,
    ) -> Option<VisibilityEdge> {
        let id = self.find_edge(source, target)?;
        self.remove_edge(id)
    }

    /// Remove every edge, keeping the vertices.
    pub fn clear_edges(&mut self) {
        for slot in &mut self.edges {
            *slot = None;
        }
        for vertex in self.vertices.iter_mut().flatten() {
            vertex.clear_edges();
        }
        self.edge_count = 0;
    }

    /// Replace an edge's weight.
    pub fn set_weight(&mut self, id: EdgeId, weight: f64) -> Result<()> {
        self.edge_mut(id)
            .ok_or(RouteError::UnknownEdge(id))?
            .set_weight(weight)
    }

    /// Replace an edge's length multiplier.
    pub fn set_length_multiplier(&mut self, id: EdgeId, multiplier: f64) -> Result<()> {
        self.edge_mut(id)
            .ok_or(RouteError::UnknownEdge(id))?
            .set_length_multiplier(multiplier)
    }

    /// Install a passability check on an edge.
    pub fn set_passability(&mut self, id: EdgeId, passability: Passability) -> Result<()> {
        self.edge_mut(id)
            .ok_or(RouteError::UnknownEdge(id))?
            .set_passability(passability);
        Ok(())
    }

    /// Make an edge unconditionally passable again.
    pub fn clear_passability(&mut self, id: EdgeId) -> Result<()> {
        self.edge_mut(id)
            .ok_or(RouteError::UnknownEdge(id))?
            .clear_passability();
        Ok(())
    }
}

fn check_point(point: Point2D) -> Result<Point2D> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(RouteError::InvalidPoint(point))
    }
}

/// A live edge seen together with its endpoints.
#[derive(Clone, Copy, Debug)]
pub struct EdgeView<'g> {
    id: EdgeId,
    edge: &'g VisibilityEdge,
    source: &'g VisibilityVertex,
    target: &'g VisibilityVertex,
}

impl<'g> EdgeView<'g> {
    /// Handle of the edge.
    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The edge itself.
    #[inline]
    pub fn edge(&self) -> &'g VisibilityEdge {
        self.edge
    }

    /// Start vertex.
    #[inline]
    pub fn source(&self) -> &'g VisibilityVertex {
        self.source
    }

    /// End vertex.
    #[inline]
    pub fn target(&self) -> &'g VisibilityVertex {
        self.target
    }

    /// Start point.
    #[inline]
    pub fn source_point(&self) -> Point2D {
        self.source.point()
    }

    /// End point.
    #[inline]
    pub fn target_point(&self) -> Point2D {
        self.target.point()
    }

    /// Stored weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.edge.weight()
    }

    /// Euclidean distance between the endpoints times the length multiplier,
    /// recomputed on every call.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.source_point() - self.target_point()).length() * self.edge.length_multiplier()
    }

    /// Evaluate the passability check now.
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.edge.is_traversable()
    }
}

impl fmt::Display for EdgeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{} ({})",
            self.source,
            self.target,
            format_weight(self.edge.weight())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Gate;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_find_or_add_vertex_idempotent() {
        let mut graph = VisibilityGraph::new();
        let a = graph.find_or_add_vertex(p(1.0, 2.0)).unwrap();
        assert_eq!(graph.vertex_count(), 1);

        let b = graph.find_or_add_vertex(p(1.0, 2.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.find_vertex(p(1.0, 2.0)), Some(a));
        assert_eq!(graph.find_vertex(p(2.0, 1.0)), None);
    }

    #[test]
    fn test_add_edge_registers_both_ends() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge(p(0.0, 0.0), p(3.0, 4.0), 2.0).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let s = graph.find_vertex(p(0.0, 0.0)).unwrap();
        let t = graph.find_vertex(p(3.0, 4.0)).unwrap();
        assert_eq!(graph.vertex(s).unwrap().out_edges(), &[e]);
        assert!(graph.vertex(s).unwrap().in_edges().is_empty());
        assert_eq!(graph.vertex(t).unwrap().in_edges(), &[e]);

        let edge = graph.edge(e).unwrap();
        assert_eq!(edge.source(), s);
        assert_eq!(edge.target(), t);
        assert_eq!(edge.weight(), 2.0);
    }

    #[test]
    fn test_edge_length_with_multiplier() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge_between(p(1.0, 1.0), p(4.0, 5.0)).unwrap();
        assert_relative_eq!(graph.edge_length(e).unwrap(), 5.0);

        graph.set_length_multiplier(e, 1.5).unwrap();
        assert_relative_eq!(graph.edge_length(e).unwrap(), 7.5);

        let found = graph.find_edge(p(1.0, 1.0), p(4.0, 5.0)).unwrap();
        assert_eq!(found, e);
        assert_relative_eq!(graph.edge_view(found).unwrap().length(), 7.5);
    }

    #[test]
    fn test_self_loop_leaves_graph_untouched() {
        let mut graph = VisibilityGraph::new();
        let err = graph.add_edge(p(1.0, 1.0), p(1.0, 1.0), 1.0).unwrap_err();
        assert_eq!(err, RouteError::InvalidEdge { point: p(1.0, 1.0) });
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);

        let err = graph.add_edge(p(0.0, 0.0), p(1.0, 1.0), -2.0).unwrap_err();
        assert!(matches!(err, RouteError::InvalidWeight { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_distance_edge_weight() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_distance_edge(p(0.0, 0.0), p(0.0, 2.5)).unwrap();
        assert_relative_eq!(graph.edge(e).unwrap().weight(), 2.5);
    }

    #[test]
    fn test_remove_edge_keeps_vertices() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        let removed = graph.remove_edge(e).unwrap();
        assert_eq!(removed.weight(), DEFAULT_WEIGHT);

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.vertices().all(VisibilityVertex::is_isolated));
        assert!(graph.edge(e).is_none());
        assert!(graph.remove_edge(e).is_none());

        // Stale handle does not alias the next edge
        let e2 = graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        assert_ne!(e, e2);
        assert!(graph.edge(e).is_none());
    }

    #[test]
    fn test_remove_edge_between() {
        let mut graph = VisibilityGraph::new();
        graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        assert!(graph.remove_edge_between(p(1.0, 0.0), p(0.0, 0.0)).is_none());
        assert!(graph.remove_edge_between(p(0.0, 0.0), p(1.0, 0.0)).is_some());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut graph = VisibilityGraph::new();
        graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        graph.add_edge_between(p(1.0, 0.0), p(2.0, 0.0)).unwrap();
        let keep = graph.add_edge_between(p(2.0, 0.0), p(3.0, 0.0)).unwrap();

        let removed = graph.remove_vertex(p(1.0, 0.0)).unwrap();
        assert_eq!(removed.point(), p(1.0, 0.0));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edge(keep).is_some());
        assert!(graph.find_vertex(p(1.0, 0.0)).is_none());

        let v0 = graph.find_vertex(p(0.0, 0.0)).unwrap();
        assert!(graph.vertex(v0).unwrap().is_isolated());
        assert!(graph.remove_vertex(p(1.0, 0.0)).is_none());
    }

    #[test]
    fn test_prune_isolated_vertices() {
        let mut graph = VisibilityGraph::new();
        graph.find_or_add_vertex(p(5.0, 5.0)).unwrap();
        let e = graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        graph.add_edge_between(p(1.0, 0.0), p(2.0, 0.0)).unwrap();
        graph.remove_edge(e);

        assert_eq!(graph.prune_isolated_vertices(), 2);
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.find_vertex(p(0.0, 0.0)).is_none());
        assert!(graph.find_vertex(p(5.0, 5.0)).is_none());
        assert_eq!(graph.prune_isolated_vertices(), 0);
    }

    #[test]
    fn test_clear_edges() {
        let mut graph = VisibilityGraph::new();
        graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        graph.add_edge_between(p(1.0, 0.0), p(1.0, 1.0)).unwrap();
        graph.clear_edges();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.vertices().all(VisibilityVertex::is_isolated));
    }

    #[test]
    fn test_clone_and_reverse_edges() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge(p(0.0, 0.0), p(2.0, 0.0), 4.0).unwrap();

        let twin = graph.clone_edge(e).unwrap();
        let rev = graph.add_reversed_clone(e).unwrap();
        assert_eq!(graph.edge_count(), 3);

        let original = graph.edge(e).unwrap();
        let twin_edge = graph.edge(twin).unwrap();
        let rev_edge = graph.edge(rev).unwrap();
        assert_eq!(twin_edge.source(), original.source());
        assert_eq!(twin_edge.target(), original.target());
        assert_eq!(twin_edge.weight(), DEFAULT_WEIGHT);
        assert_eq!(rev_edge.source(), original.target());
        assert_eq!(rev_edge.target(), original.source());

        assert_eq!(graph.find_edge(p(2.0, 0.0), p(0.0, 0.0)), Some(rev));

        graph.remove_edge(e);
        assert_eq!(graph.clone_edge(e), Err(RouteError::UnknownEdge(e)));
    }

    #[test]
    fn test_insert_edge_checks_liveness() {
        let mut graph = VisibilityGraph::new();
        let mut other = VisibilityGraph::new();
        other.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        other.add_edge_between(p(2.0, 0.0), p(3.0, 0.0)).unwrap();
        let foreign = other.edges().last().map(|(_, e)| e.clone()).unwrap();

        let err = graph.insert_edge(foreign.clone()).unwrap_err();
        assert!(matches!(err, RouteError::UnknownVertex(_)));
        assert_eq!(graph.edge_count(), 0);

        // Indices live here are taken at face value
        graph.add_edge_between(p(5.0, 5.0), p(6.0, 5.0)).unwrap();
        graph.add_edge_between(p(7.0, 5.0), p(8.0, 5.0)).unwrap();
        let id = graph.insert_edge(foreign).unwrap();
        let view = graph.edge_view(id).unwrap();
        assert_eq!(view.source_point(), p(7.0, 5.0));
        assert_eq!(view.target_point(), p(8.0, 5.0));
    }

    #[test]
    fn test_relocate_vertex() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge_between(p(0.0, 0.0), p(3.0, 0.0)).unwrap();
        graph.find_or_add_vertex(p(9.0, 9.0)).unwrap();

        let id = graph.relocate_vertex(p(3.0, 0.0), p(3.0, 4.0)).unwrap();
        assert_eq!(graph.point(id), Some(p(3.0, 4.0)));
        assert_eq!(graph.find_vertex(p(3.0, 4.0)), Some(id));
        assert!(graph.find_vertex(p(3.0, 0.0)).is_none());
        assert_relative_eq!(graph.edge_length(e).unwrap(), 5.0);

        assert_eq!(
            graph.relocate_vertex(p(3.0, 4.0), p(9.0, 9.0)),
            Err(RouteError::PointOccupied(p(9.0, 9.0)))
        );
        assert_eq!(
            graph.relocate_vertex(p(7.0, 7.0), p(8.0, 8.0)),
            Err(RouteError::UnknownPoint(p(7.0, 7.0)))
        );
    }

    #[test]
    fn test_non_finite_points_rejected() {
        let mut graph = VisibilityGraph::new();
        let nan = p(f64::NAN, 0.0);
        let inf = p(0.0, f64::INFINITY);

        // NaN != NaN, so without the finiteness check this would be a self-loop
        assert!(matches!(
            graph.add_edge(nan, nan, 1.0),
            Err(RouteError::InvalidPoint(_))
        ));
        assert!(matches!(
            graph.add_edge(nan, p(1.0, 0.0), 1.0),
            Err(RouteError::InvalidPoint(_))
        ));
        assert!(matches!(
            graph.add_distance_edge(p(1.0, 0.0), inf),
            Err(RouteError::InvalidPoint(_))
        ));
        assert!(matches!(
            graph.find_or_add_vertex(nan),
            Err(RouteError::InvalidPoint(_))
        ));
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);

        graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        assert!(matches!(
            graph.relocate_vertex(p(1.0, 0.0), inf),
            Err(RouteError::InvalidPoint(_))
        ));
        assert_eq!(graph.find_vertex(p(1.0, 0.0)).map(|v| v.index()), Some(1));
    }

    #[test]
    fn test_mutators_reject_dead_edges() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        graph.set_weight(e, 0.5).unwrap();
        assert_eq!(graph.edge(e).unwrap().weight(), 0.5);
        assert!(graph.set_weight(e, -0.5).is_err());

        graph.remove_edge(e);
        assert_eq!(graph.set_weight(e, 1.0), Err(RouteError::UnknownEdge(e)));
        assert_eq!(
            graph.set_passability(e, Passability::new(|| true)),
            Err(RouteError::UnknownEdge(e))
        );
        assert_eq!(graph.clear_passability(e), Err(RouteError::UnknownEdge(e)));
    }

    #[test]
    fn test_passability_through_graph() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        let gate = Gate::new(false);
        graph.set_passability(e, Passability::new(gate.clone())).unwrap();

        assert!(!graph.edge_view(e).unwrap().is_traversable());
        gate.open();
        assert!(graph.edge_view(e).unwrap().is_traversable());

        graph.clear_passability(e).unwrap();
        gate.close();
        assert!(graph.edge_view(e).unwrap().is_traversable());
    }

    #[test]
    fn test_edge_display() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge(p(0.0, 0.0), p(1.0, 1.0), 1.5).unwrap();
        assert_eq!(graph.edge_view(e).unwrap().to_string(), "(0, 0)->(1, 1) (1.5)");

        let e = graph.add_edge(p(1.0, 1.0), p(2.0, 0.5), 1.0 / 3.0).unwrap();
        assert_eq!(
            graph.edge_view(e).unwrap().to_string(),
            "(1, 1)->(2, 0.5) (0.3333)"
        );
    }

    #[test]
    fn test_graph_clone_is_independent() {
        let mut graph = VisibilityGraph::new();
        let e = graph.add_edge_between(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        let mut copy = graph.clone();
        copy.remove_edge(e);
        copy.find_or_add_vertex(p(4.0, 4.0)).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(copy.edge_count(), 0);
        assert_eq!(copy.vertex_count(), 3);
    }

    #[test]
    fn test_graph_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VisibilityGraph>();
    }
}
