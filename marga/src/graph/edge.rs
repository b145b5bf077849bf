//! Edges of the visibility graph.

use std::fmt;

use crate::error::{Result, RouteError};

use super::passability::Passability;
use super::vertex::{VertexId, VisibilityVertex};

/// Weight given to edges created without an explicit one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Scale applied to Euclidean distance unless configured otherwise.
pub const DEFAULT_LENGTH_MULTIPLIER: f64 = 1.0;

/// Handle to an edge inside a [`VisibilityGraph`](super::VisibilityGraph).
///
/// Removed edges leave a tombstone, so a stale handle never aliases a
/// different edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Arena index of this edge.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A weighted, directed connection between two mutually visible vertices.
///
/// The edge refers to its endpoints by handle and does not own them. Its
/// geometric length depends on the endpoint positions and is therefore read
/// through the graph, see [`EdgeView::length`](super::EdgeView::length).
///
/// `Clone` copies every attribute and is what a whole-graph copy uses. The
/// structural twins needed for symmetric traversal come from
/// [`clone_topology`](Self::clone_topology) and
/// [`reversed_clone`](Self::reversed_clone), which keep the endpoints and
/// reset the cost attributes.
#[derive(Clone, Debug)]
pub struct VisibilityEdge {
    source: VertexId,
    target: VertexId,
    weight: f64,
    length_multiplier: f64,
    passability: Option<Passability>,
}

impl VisibilityEdge {
    /// Create an edge from `source` to `target`.
    ///
    /// # Errors
    /// [`RouteError::InvalidEdge`] if both vertices sit at the same point,
    /// [`RouteError::InvalidWeight`] if `weight` is negative or not finite.
    pub fn new(source: &VisibilityVertex, target: &VisibilityVertex, weight: f64) -> Result<Self> {
        if source.point() == target.point() {
            return Err(RouteError::InvalidEdge {
                point: source.point(),
            });
        }
        let weight = check_weight(weight)?;
        Ok(Self::from_parts(source.id(), target.id(), weight))
    }

    /// Create an edge with [`DEFAULT_WEIGHT`].
    pub fn between(source: &VisibilityVertex, target: &VisibilityVertex) -> Result<Self> {
        Self::new(source, target, DEFAULT_WEIGHT)
    }

    /// Endpoints must already be known to be distinct and the weight valid.
    pub(crate) fn from_parts(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            length_multiplier: DEFAULT_LENGTH_MULTIPLIER,
            passability: None,
        }
    }

    /// Start vertex.
    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// End vertex.
    #[inline]
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Stored cost of the edge.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Scale applied to Euclidean distance to obtain the routing length.
    #[inline]
    pub fn length_multiplier(&self) -> f64 {
        self.length_multiplier
    }

    /// Installed passability check, if any.
    #[inline]
    pub fn passability(&self) -> Option<&Passability> {
        self.passability.as_ref()
    }

    /// Evaluate passability now. Edges without a check are always passable.
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.passability
            .as_ref()
            .is_none_or(Passability::is_passable)
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not an endpoint.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Replace the weight.
    ///
    /// # Errors
    /// [`RouteError::InvalidWeight`] for negative or non-finite values; the
    /// edge is left unchanged.
    pub fn set_weight(&mut self, weight: f64) -> Result<()> {
        self.weight = check_weight(weight)?;
        Ok(())
    }

    /// Replace the length multiplier.
    ///
    /// # Errors
    /// [`RouteError::InvalidMultiplier`] for negative or non-finite values.
    pub fn set_length_multiplier(&mut self, multiplier: f64) -> Result<()> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(RouteError::InvalidMultiplier { multiplier });
        }
        self.length_multiplier = multiplier;
        Ok(())
    }

    /// Install a passability check, replacing any previous one.
    pub fn set_passability(&mut self, passability: Passability) {
        self.passability = Some(passability);
    }

    /// Remove the passability check; the edge becomes always passable.
    pub fn clear_passability(&mut self) {
        self.passability = None;
    }

    /// Same endpoints, default weight and multiplier, no passability check.
    pub fn clone_topology(&self) -> Self {
        Self::from_parts(self.source, self.target, DEFAULT_WEIGHT)
    }

    /// Like [`clone_topology`](Self::clone_topology) with the endpoints swapped.
    pub fn reversed_clone(&self) -> Self {
        Self::from_parts(self.target, self.source, DEFAULT_WEIGHT)
    }
}

pub(crate) fn check_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(RouteError::InvalidWeight { weight });
    }
    // fold -0.0
    Ok(if weight == 0.0 { 0.0 } else { weight })
}

/// Format a weight with one to four fractional digits.
pub(crate) fn format_weight(weight: f64) -> String {
    let mut s = format!("{:.4}", weight);
    if let Some(dot) = s.find('.') {
        let keep = s.trim_end_matches('0').len().max(dot + 2);
        s.truncate(keep);
    }
    s
}
