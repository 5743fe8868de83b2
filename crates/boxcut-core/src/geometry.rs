//! Geometric primitives for pattern layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in millimeters
//! - [`Bounds`] - An axis-aligned box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Patterns use the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Coordinates may be negative; panels that are shifted up by the material
//! thickness sit above `y = 0`.

use crate::segment::Segment;

/// A 2D point in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
///
/// # Examples
///
/// ```
/// # use boxcut_core::{geometry::Bounds, segment::Segment};
/// let bounds = Bounds::from_segments(&[
///     Segment::new(0.0, -3.0, 10.0, -3.0),
///     Segment::new(4.0, 0.0, 4.0, 20.0),
/// ]);
///
/// assert_eq!(bounds.min_y(), -3.0);
/// assert_eq!(bounds.width(), 10.0);
/// assert_eq!(bounds.height(), 23.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds from two corner points in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Returns the smallest bounds containing every segment endpoint.
    ///
    /// An empty slice yields the default (zero) bounds.
    pub fn from_segments(segments: &[Segment]) -> Self {
        segments
            .iter()
            .map(|segment| {
                Self::new(
                    Point::new(segment.x1(), segment.y1()),
                    Point::new(segment.x2(), segment.y2()),
                )
            })
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// The top-left corner in SVG coordinates.
    pub fn min_point(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: &Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns bounds grown by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}
