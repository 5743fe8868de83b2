//! Tolerance-aware line segments.
//!
//! This module provides [`Segment`], the immutable value type every other
//! stage of the pipeline works with. A segment is stored in a canonical
//! endpoint order so that two geometrically identical segments compare equal
//! regardless of the order their endpoints were supplied in.
//!
//! # Overview
//!
//! - [`Segment`] - A 2D line segment in millimeters
//! - [`Orientation`] - Horizontal, vertical or diagonal classification
//! - [`TOLERANCE`] - Absolute coordinate tolerance used for equality
//! - [`MIN_SEGMENT_LENGTH`] - Significance threshold for overlaps and output
//!
//! # Canonical Order
//!
//! | Orientation | Invariant  |
//! |-------------|------------|
//! | Horizontal  | `x1 <= x2` |
//! | Vertical    | `y1 <= y2` |
//! | Diagonal    | `x1 <= x2` |
//!
//! # Equality
//!
//! Equality compares each coordinate within [`TOLERANCE`]. That relation has
//! no rounding boundary, so any bucketing hash would split some equal pairs;
//! `Segment` therefore does not implement [`Hash`](std::hash::Hash). Collections
//! of segments are deduplicated by linear scan (see [`crate::dedup`]).

use std::fmt;

/// Absolute tolerance in millimeters for coordinate comparisons.
pub const TOLERANCE: f64 = 1e-6;

/// Segments at or below this length (in millimeters) are degenerate slivers.
pub const MIN_SEGMENT_LENGTH: f64 = 0.1;

/// Scale factor matching six decimal places of rounding.
pub const KEY_SCALE: f64 = 1e6;

/// Rounds a coordinate to six decimal places and returns it as an integer key.
///
/// # Examples
///
/// ```
/// # use boxcut_core::segment::round_key;
/// assert_eq!(round_key(1.000_000_2), round_key(1.0));
/// assert_ne!(round_key(1.000_01), round_key(1.0));
/// ```
pub fn round_key(value: f64) -> i64 {
    // Saturating cast; finite millimeter coordinates stay well inside i64.
    (value * KEY_SCALE).round() as i64
}

/// Orientation classification of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

/// A 2D line segment with tolerance-aware equality.
///
/// Coordinates are floating-point millimeters. Construction classifies the
/// orientation and normalizes endpoint order; all further transformations
/// ([`overlap_with`](Self::overlap_with), [`subtract`](Self::subtract))
/// produce new values.
///
/// # Examples
///
/// ```
/// # use boxcut_core::segment::Segment;
/// let a = Segment::new(10.0, 0.0, 0.0, 0.0);
/// let b = Segment::new(0.0, 0.0, 10.0, 0.0);
///
/// assert!(a.is_horizontal());
/// assert_eq!(a, b);
/// assert_eq!(a.x1(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    horizontal: bool,
    vertical: bool,
}

impl Segment {
    /// Creates a segment from two endpoints in any order.
    ///
    /// Coordinates must be finite; non-finite input is a caller error.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let horizontal = (y1 - y2).abs() < TOLERANCE;
        let vertical = (x1 - x2).abs() < TOLERANCE;

        let swap = if horizontal {
            x1 > x2
        } else if vertical {
            y1 > y2
        } else {
            x1 > x2
        };

        let (x1, y1, x2, y2) = if swap {
            (x2, y2, x1, y1)
        } else {
            (x1, y1, x2, y2)
        };

        Self {
            x1,
            y1,
            x2,
            y2,
            horizontal,
            vertical,
        }
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// Returns true if both endpoints share the same y within [`TOLERANCE`].
    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    /// Returns true if both endpoints share the same x within [`TOLERANCE`].
    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Returns true if the segment is neither horizontal nor vertical.
    pub fn is_diagonal(&self) -> bool {
        !self.horizontal && !self.vertical
    }

    /// Returns the orientation of this segment.
    ///
    /// A zero-length segment is both horizontal and vertical; it reports
    /// [`Orientation::Horizontal`].
    pub fn orientation(&self) -> Orientation {
        if self.horizontal {
            Orientation::Horizontal
        } else if self.vertical {
            Orientation::Vertical
        } else {
            Orientation::Diagonal
        }
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    /// Returns true if the segment is no longer than [`MIN_SEGMENT_LENGTH`].
    pub fn is_degenerate(&self) -> bool {
        self.length() <= MIN_SEGMENT_LENGTH
    }

    /// Slope of a diagonal segment. Infinite when the endpoints share an x.
    fn slope(&self) -> f64 {
        if self.x2 == self.x1 {
            f64::INFINITY
        } else {
            (self.y2 - self.y1) / (self.x2 - self.x1)
        }
    }

    /// Checks whether this segment is parallel to `other`.
    ///
    /// Horizontal pairs and vertical pairs are always parallel. Diagonal
    /// pairs are parallel when their slopes agree within [`TOLERANCE`].
    pub fn is_parallel_to(&self, other: &Segment) -> bool {
        if (self.horizontal && other.horizontal) || (self.vertical && other.vertical) {
            return true;
        }

        if self.is_diagonal() && other.is_diagonal() {
            return (self.slope() - other.slope()).abs() < TOLERANCE;
        }

        false
    }

    /// Computes the collinear overlap with `other`.
    ///
    /// Only horizontal pairs on the same y and vertical pairs on the same x
    /// can overlap; diagonal pairs never do. The result is the intersection
    /// of the two ranges along the shared axis. Segments that merely touch
    /// produce a zero-length overlap; use
    /// [`significant_overlap_with`](Self::significant_overlap_with) to
    /// discard those.
    ///
    /// # Examples
    ///
    /// ```
    /// # use boxcut_core::segment::Segment;
    /// let a = Segment::new(0.0, 0.0, 10.0, 0.0);
    /// let b = Segment::new(5.0, 0.0, 15.0, 0.0);
    ///
    /// let overlap = a.overlap_with(&b).unwrap();
    /// assert_eq!(overlap, Segment::new(5.0, 0.0, 10.0, 0.0));
    /// ```
    pub fn overlap_with(&self, other: &Segment) -> Option<Segment> {
        if !self.is_parallel_to(other) {
            return None;
        }

        if self.horizontal && other.horizontal && (self.y1 - other.y1).abs() < TOLERANCE {
            let min_x = self.x1.max(other.x1);
            let max_x = self.x2.min(other.x2);

            return (max_x - min_x >= -TOLERANCE)
                .then(|| Segment::new(min_x, self.y1, max_x, self.y1));
        }

        if self.vertical && other.vertical && (self.x1 - other.x1).abs() < TOLERANCE {
            let min_y = self.y1.max(other.y1);
            let max_y = self.y2.min(other.y2);

            return (max_y - min_y >= -TOLERANCE)
                .then(|| Segment::new(self.x1, min_y, self.x1, max_y));
        }

        None
    }

    /// Like [`overlap_with`](Self::overlap_with), but only returns overlaps
    /// longer than [`MIN_SEGMENT_LENGTH`].
    pub fn significant_overlap_with(&self, other: &Segment) -> Option<Segment> {
        self.overlap_with(other)
            .filter(|overlap| overlap.length() > MIN_SEGMENT_LENGTH)
    }

    /// Removes `covered` from this segment and returns what remains.
    ///
    /// `covered` must lie within this segment. The result holds the leading
    /// remainder and the trailing remainder, in that order; a remainder
    /// shorter than [`TOLERANCE`] is omitted. Diagonal segments return no
    /// pieces since they never overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use boxcut_core::segment::Segment;
    /// let line = Segment::new(0.0, 0.0, 10.0, 0.0);
    /// let covered = Segment::new(3.0, 0.0, 7.0, 0.0);
    ///
    /// let pieces = line.subtract(&covered);
    /// assert_eq!(pieces.len(), 2);
    /// assert_eq!(pieces[0], Segment::new(0.0, 0.0, 3.0, 0.0));
    /// assert_eq!(pieces[1], Segment::new(7.0, 0.0, 10.0, 0.0));
    /// ```
    pub fn subtract(&self, covered: &Segment) -> Vec<Segment> {
        let mut pieces = Vec::with_capacity(2);

        if self.horizontal {
            if covered.x1 > self.x1 + TOLERANCE {
                pieces.push(Segment::new(self.x1, self.y1, covered.x1, self.y1));
            }
            if covered.x2 < self.x2 - TOLERANCE {
                pieces.push(Segment::new(covered.x2, self.y1, self.x2, self.y1));
            }
        } else if self.vertical {
            if covered.y1 > self.y1 + TOLERANCE {
                pieces.push(Segment::new(self.x1, self.y1, self.x1, covered.y1));
            }
            if covered.y2 < self.y2 - TOLERANCE {
                pieces.push(Segment::new(self.x1, covered.y2, self.x1, self.y2));
            }
        }

        pieces
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.x1 - other.x1).abs() < TOLERANCE
            && (self.y1 - other.y1).abs() < TOLERANCE
            && (self.x2 - other.x2).abs() < TOLERANCE
            && (self.y2 - other.y2).abs() < TOLERANCE
    }
}

impl Eq for Segment {}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line({},{} -> {},{})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn coordinate_strategy() -> impl Strategy<Value = f64> {
        -1000.0f64..1000.0
    }

    /// Swapping endpoints yields the same canonical segment.
    fn check_endpoint_order_is_irrelevant(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<(), TestCaseError> {
        let forward = Segment::new(x1, y1, x2, y2);
        let backward = Segment::new(x2, y2, x1, y1);

        prop_assert_eq!(forward, backward);
        Ok(())
    }

    /// Overlap plus both remainders add up to the original length.
    fn check_subtract_conserves_length(
        y: f64,
        start: f64,
        len: f64,
        cut_start: f64,
        cut_len: f64,
    ) -> Result<(), TestCaseError> {
        let line = Segment::new(start, y, start + len, y);
        let cutter = Segment::new(start + cut_start, y, start + cut_start + cut_len, y);

        if let Some(overlap) = line.overlap_with(&cutter) {
            let remainder: f64 = line.subtract(&overlap).iter().map(Segment::length).sum();
            prop_assert!(approx_eq!(
                f64,
                remainder + overlap.length(),
                line.length(),
                epsilon = 1e-5
            ));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn endpoint_order_is_irrelevant(
            x1 in coordinate_strategy(),
            y1 in coordinate_strategy(),
            x2 in coordinate_strategy(),
            y2 in coordinate_strategy(),
        ) {
            check_endpoint_order_is_irrelevant(x1, y1, x2, y2)?;
        }

        #[test]
        fn subtract_conserves_length(
            y in coordinate_strategy(),
            start in coordinate_strategy(),
            len in 0.5f64..200.0,
            cut_start in -100.0f64..200.0,
            cut_len in 0.5f64..200.0,
        ) {
            check_subtract_conserves_length(y, start, len, cut_start, cut_len)?;
        }
    }
}
