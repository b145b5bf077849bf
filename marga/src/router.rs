//! Routing facade over [`ShortestPathSearch`].
//!
//! [`route`] is the one-call entry point used by the layout engine: it runs a
//! default-configured search and returns the raw point sequence. [`Router`]
//! carries a [`RouterConfig`] for callers that need a different cost model,
//! a search budget, or the full [`RoutePath`].

use log::{debug, trace};

use crate::config::RouterConfig;
use crate::core::Point2D;
use crate::error::{Result, RouteError};
use crate::graph::VisibilityGraph;
use crate::search::{RoutePath, ShortestPathSearch};

/// Route between two points with the default configuration.
///
/// Returns the points of the cheapest route by edge length, from `source`
/// to `target` inclusive.
///
/// # Errors
/// [`RouteError::NoPathFound`] when the points are disconnected (including
/// through closed passability checks) and [`RouteError::UnknownPoint`] when
/// either point has no vertex in `graph`.
pub fn route(graph: &VisibilityGraph, source: Point2D, target: Point2D) -> Result<Vec<Point2D>> {
    Router::with_defaults().route_points(graph, source, target)
}

/// Configured router.
#[derive(Clone, Debug, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    /// Create a router with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Router configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Find the cheapest route from `source` to `target`.
    pub fn route(
        &self,
        graph: &VisibilityGraph,
        source: Point2D,
        target: Point2D,
    ) -> Result<RoutePath> {
        let search = ShortestPathSearch::new(graph, self.config.search.clone());
        let result = search.find_path(source, target);

        if self.config.log_routes {
            match &result {
                Ok(path) => debug!(
                    "[Router] {} -> {}: {} points, cost={:.4}, settled={}",
                    source,
                    target,
                    path.len(),
                    path.cost,
                    path.stats.settled
                ),
                Err(e) => debug!("[Router] {} -> {}: {} ({})", source, target, e, e.code()),
            }
        }
        result
    }

    /// [`route`](Self::route), keeping only the points.
    pub fn route_points(
        &self,
        graph: &VisibilityGraph,
        source: Point2D,
        target: Point2D,
    ) -> Result<Vec<Point2D>> {
        self.route(graph, source, target).map(RoutePath::into_points)
    }

    /// Route each `(source, target)` pair in order over the same graph.
    ///
    /// Failures are reported per pair; one unroutable pair does not stop the
    /// rest.
    pub fn route_all(
        &self,
        graph: &VisibilityGraph,
        pairs: &[(Point2D, Point2D)],
    ) -> Vec<Result<RoutePath>> {
        let results: Vec<_> = pairs
            .iter()
            .map(|&(source, target)| self.route(graph, source, target))
            .collect();

        let failed = results
            .iter()
            .filter(|r| r.as_ref().is_err_and(|e: &RouteError| !e.is_recoverable()))
            .count();
        trace!(
            "[Router] route_all: {} pairs, {} routed, {} hard failures",
            pairs.len(),
            results.iter().filter(|r| r.is_ok()).count(),
            failed
        );
        results
    }
}
