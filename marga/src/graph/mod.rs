//! Visibility graph data model.
//!
//! Vertices are obstacle corners and route terminals; edges join pairs of
//! points with an unobstructed line of sight. The graph is populated by an
//! obstacle-visibility pass outside this crate and consumed by
//! [`search`](crate::search).
//!
//! # Ownership
//!
//! [`VisibilityGraph`] owns every vertex and edge in two arenas. Edges hold
//! [`VertexId`] handles to their endpoints and vertices hold [`EdgeId`]
//! handles to their incident edges, so there are no ownership cycles.
//!
//! # Passability
//!
//! An edge may carry a [`Passability`] check, evaluated each time a search
//! looks at the edge. [`Gate`] is a ready-made shareable switch.

pub mod edge;
pub mod passability;
pub mod vertex;
pub mod visibility_graph;

pub use edge::{DEFAULT_LENGTH_MULTIPLIER, DEFAULT_WEIGHT, EdgeId, VisibilityEdge};
pub use passability::{Gate, Passability, PassabilityCheck};
pub use vertex::{VertexId, VisibilityVertex};
pub use visibility_graph::{EdgeView, VisibilityGraph};
