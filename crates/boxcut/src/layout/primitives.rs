//! Edge emitters for basic shapes.

use boxcut_core::{Segment, geometry::Point};

/// Returns the four edges of an axis-aligned rectangle, clockwise from the
/// top-left corner.
///
/// # Examples
///
/// ```
/// use boxcut::layout::rectangle_segments;
///
/// let edges = rectangle_segments(0.0, 0.0, 10.0, 5.0);
/// assert_eq!(edges.len(), 4);
/// ```
pub fn rectangle_segments(x: f64, y: f64, width: f64, height: f64) -> Vec<Segment> {
    polygon_segments(&[
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ])
}

/// Returns the closed edge loop through `points`.
///
/// Fewer than two points produce no edges.
pub fn polygon_segments(points: &[Point]) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }

    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(start, end)| Segment::new(start.x(), start.y(), end.x(), end.y()))
        .collect()
}
