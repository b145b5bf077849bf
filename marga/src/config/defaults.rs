//! Default value functions for serde deserialization.

use super::search::{EdgeCost, Traversal};

pub fn edge_cost() -> EdgeCost {
    EdgeCost::Length
}

pub fn traversal() -> Traversal {
    Traversal::Undirected
}

pub fn max_iterations() -> Option<usize> {
    None
}

pub fn enabled() -> bool {
    true
}
