//! Point type for routing geometry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// A point (or vector) in the routing plane.
///
/// Coordinates are `f64`: layout coordinates routinely span several orders of
/// magnitude and corner points must compare exactly when used as graph keys.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2D {
    /// Origin.
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        (*self - *other).length()
    }

    /// True if both coordinates are finite. Only finite points can be graph
    /// vertices.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Exact hashable key for this point.
    #[inline]
    pub fn key(&self) -> PointKey {
        PointKey::from(*self)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bitwise key of a [`Point2D`], usable in hash maps.
///
/// Two points map to the same key exactly when they compare equal with `==`
/// (`-0.0` is folded onto `0.0`). NaN coordinates are not meaningful keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey {
    x: u64,
    y: u64,
}

impl From<Point2D> for PointKey {
    #[inline]
    fn from(p: Point2D) -> Self {
        Self {
            x: canonical_bits(p.x),
            y: canonical_bits(p.y),
        }
    }
}

#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}
