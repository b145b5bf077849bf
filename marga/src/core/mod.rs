//! Core geometry types for the routing library.
//!
//! - [`Point2D`]: 2D point / vector with the arithmetic the router needs
//! - [`PointKey`]: exact hash key for looking vertices up by point

mod point;

pub use point::{Point2D, PointKey};
