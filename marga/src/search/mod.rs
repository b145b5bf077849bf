//! Shortest path search over a [`VisibilityGraph`](crate::graph::VisibilityGraph).
//!
//! Dijkstra's algorithm with a binary heap. Among queue entries of equal
//! cost the earliest pushed is settled first, so results are deterministic
//! for a given graph and insertion order.
//!
//! # Cost models
//!
//! - [`EdgeCost::Length`]: endpoint distance times the edge's length multiplier
//! - [`EdgeCost::Weight`]: the edge's stored weight

mod dijkstra;
mod types;

pub use crate::config::{EdgeCost, SearchConfig, Traversal};
pub use dijkstra::ShortestPathSearch;
pub use types::{RoutePath, SearchStats};
