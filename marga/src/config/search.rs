//! Shortest-path search configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// What an edge contributes to a path's cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCost {
    /// Endpoint distance times the edge's length multiplier.
    #[default]
    Length,
    /// The edge's stored weight.
    Weight,
}

/// Which incident edges the search follows out of a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Edges are usable in both directions: out edges forward, in edges
    /// backward.
    #[default]
    Undirected,
    /// Only out edges. Travel against an edge needs an explicit reversed
    /// clone in the graph.
    Directed,
}

/// Shortest-path search settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Edge cost model
    #[serde(default = "defaults::edge_cost")]
    pub cost: EdgeCost,

    /// Edge direction handling
    #[serde(default = "defaults::traversal")]
    pub traversal: Traversal,

    /// Maximum vertices to settle before giving up (None = unbounded)
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cost: EdgeCost::Length,
            traversal: Traversal::Undirected,
            max_iterations: None,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the cost model.
    pub fn with_cost(mut self, cost: EdgeCost) -> Self {
        self.cost = cost;
        self
    }

    /// Builder-style setter for the traversal mode.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Builder-style setter for the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}
