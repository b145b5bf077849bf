//! Passability predicates for visibility edges.
//!
//! Whether an edge may be used is decided by a check evaluated at traversal
//! time, so an obstacle that opens or closes between searches takes effect
//! without rebuilding the graph.
//!
//! # Example
//!
//! ```rust,ignore
//! use marga::graph::{Gate, Passability, VisibilityGraph};
//! use marga::core::Point2D;
//!
//! let mut graph = VisibilityGraph::new();
//! let door = graph.add_distance_edge(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0))?;
//!
//! let gate = Gate::new(true);
//! graph.set_passability(door, Passability::new(gate.clone()))?;
//!
//! gate.close(); // the next search treats the edge as absent
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Decides whether an edge can currently be traversed.
///
/// Implementations may read external mutable state but must not mutate the
/// edge or the graph. Any closure `Fn() -> bool + Send + Sync` qualifies.
pub trait PassabilityCheck: Send + Sync {
    /// True if the edge may be used right now.
    fn is_passable(&self) -> bool;
}

impl<F> PassabilityCheck for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_passable(&self) -> bool {
        self()
    }
}

/// Shared handle to a [`PassabilityCheck`], stored on edges.
///
/// Cloning shares the underlying check.
#[derive(Clone)]
pub struct Passability(Arc<dyn PassabilityCheck>);

impl Passability {
    /// Wrap a check.
    pub fn new(check: impl PassabilityCheck + 'static) -> Self {
        Self(Arc::new(check))
    }

    /// Evaluate the check now.
    #[inline]
    pub fn is_passable(&self) -> bool {
        self.0.is_passable()
    }

    /// True if both handles share the same check.
    pub fn ptr_eq(&self, other: &Passability) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Passability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passability(..)")
    }
}

/// Shareable open/closed switch.
///
/// Clones observe the same state, so one clone can live on an edge while
/// another is toggled by whoever owns the obstacle.
#[derive(Clone, Debug)]
pub struct Gate {
    open: Arc<AtomicBool>,
}

impl Gate {
    /// Create a gate in the given state.
    pub fn new(open: bool) -> Self {
        Self {
            open: Arc::new(AtomicBool::new(open)),
        }
    }

    /// Open the gate.
    pub fn open(&self) {
        self.set_open(true);
    }

    /// Close the gate.
    pub fn close(&self) {
        self.set_open(false);
    }

    /// Set the gate state.
    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::Release);
    }

    /// Current state.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PassabilityCheck for Gate {
    #[inline]
    fn is_passable(&self) -> bool {
        self.is_open()
    }
}
