//! # Marga: Visibility-Graph Routing Core
//!
//! Shortest-path routing over a visibility graph, used by a diagram layout
//! engine to draw edges around obstacles.
//!
//! ## Features
//!
//! - **Point-keyed graph**: at most one vertex per coordinate, created on
//!   demand as edges are added
//! - **Dynamic passability**: edges can carry a check that is evaluated at
//!   search time, so a route can be recomputed after a gate closes without
//!   rebuilding the graph
//! - **Deterministic search**: Dijkstra with first-discovered tie-breaking
//! - **YAML configuration**: cost model, traversal and search budget
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::{Point2D, VisibilityGraph, route};
//!
//! let mut graph = VisibilityGraph::new();
//! let a = Point2D::new(0.0, 0.0);
//! let b = Point2D::new(4.0, 0.0);
//! let c = Point2D::new(4.0, 3.0);
//! graph.add_distance_edge(a, b).unwrap();
//! graph.add_distance_edge(b, c).unwrap();
//!
//! let points = route(&graph, a, c).unwrap();
//! assert_eq!(points, vec![a, b, c]);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Point type and exact point keys
//! - [`graph`]: Vertices, edges, passability and the [`VisibilityGraph`] arena
//! - [`search`]: Dijkstra shortest-path search
//! - [`config`]: Search and router configuration, YAML loading
//! - [`router`]: [`route`] entry point and the configured [`Router`]
//! - [`error`]: [`RouteError`]
//!
//! ## Data Flow
//!
//! ```text
//!     ┌──────────────────┐
//!     │  Obstacle pass   │  (outside this crate)
//!     │ corners + sight  │
//!     └────────┬─────────┘
//!              │ add_distance_edge()
//!              ▼
//!     ┌──────────────────┐        ┌──────────────┐
//!     │ VisibilityGraph  │◄───────│ Passability  │  Gate / closures
//!     │ (vertex + edge   │        │   checks     │
//!     │     arenas)      │        └──────────────┘
//!     └────────┬─────────┘
//!              │ &graph
//!              ▼
//!     ┌──────────────────┐        ┌──────────────┐
//!     │ShortestPathSearch│◄───────│ SearchConfig │  cost, traversal,
//!     │    (Dijkstra)    │        └──────────────┘  budget
//!     └────────┬─────────┘
//!              │ RoutePath
//!              ▼
//!     ┌──────────────────┐
//!     │  Router / route  │──► Vec<Point2D>
//!     └──────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod router;
pub mod search;

// Re-export main types at crate root
pub use crate::core::{Point2D, PointKey};
pub use config::{ConfigError, EdgeCost, RouterConfig, SearchConfig, Traversal};
pub use error::{Result, RouteError};
pub use graph::{
    EdgeId, EdgeView, Gate, Passability, PassabilityCheck, VertexId, VisibilityEdge,
    VisibilityGraph, VisibilityVertex,
};
pub use router::{Router, route};
pub use search::{RoutePath, SearchStats, ShortestPathSearch};
