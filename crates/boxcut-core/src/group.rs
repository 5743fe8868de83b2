//! Partitioning of segments into collinear groups.
//!
//! Horizontal segments are keyed by their shared y, vertical segments by their
//! shared x. Keys are produced by [`round_key`], so jitter well below
//! [`TOLERANCE`](crate::segment::TOLERANCE) on the same side of a rounding
//! step lands in one group. Two lines that straddle a step (y = 4e-7 and
//! y = 6e-7) get different keys and are never compared with each other,
//! even though their segments are tolerance-equal.
//! Diagonal segments are collected separately and never grouped.

use indexmap::IndexMap;

use crate::segment::{Orientation, Segment, round_key};

/// Insertion-ordered mapping from a rounded shared coordinate to its segments.
pub type OrientationGroup = IndexMap<i64, Vec<Segment>>;

/// The three partitions of a raw segment collection.
#[derive(Debug, Clone, Default)]
pub struct SegmentGroups {
    horizontal: OrientationGroup,
    vertical: OrientationGroup,
    diagonal: Vec<Segment>,
}

impl SegmentGroups {
    /// Partitions `segments` by orientation and shared coordinate.
    ///
    /// Groups appear in the order their first segment was seen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use boxcut_core::{group::SegmentGroups, segment::Segment};
    /// let groups = SegmentGroups::from_segments([
    ///     Segment::new(0.0, 0.0, 10.0, 0.0),
    ///     Segment::new(5.0, 0.000_000_1, 15.0, 0.000_000_1),
    ///     Segment::new(0.0, 0.0, 0.0, 10.0),
    ///     Segment::new(0.0, 0.0, 3.0, 4.0),
    /// ]);
    ///
    /// assert_eq!(groups.horizontal().len(), 1);
    /// assert_eq!(groups.vertical().len(), 1);
    /// assert_eq!(groups.diagonal().len(), 1);
    /// ```
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut groups = Self::default();

        for segment in segments {
            match segment.orientation() {
                Orientation::Horizontal => groups
                    .horizontal
                    .entry(round_key(segment.y1()))
                    .or_default()
                    .push(segment),
                Orientation::Vertical => groups
                    .vertical
                    .entry(round_key(segment.x1()))
                    .or_default()
                    .push(segment),
                Orientation::Diagonal => groups.diagonal.push(segment),
            }
        }

        groups
    }

    /// Horizontal segments keyed by rounded y.
    pub fn horizontal(&self) -> &OrientationGroup {
        &self.horizontal
    }

    /// Vertical segments keyed by rounded x.
    pub fn vertical(&self) -> &OrientationGroup {
        &self.vertical
    }

    /// Segments that are neither horizontal nor vertical.
    pub fn diagonal(&self) -> &[Segment] {
        &self.diagonal
    }

    /// Consumes the groups, returning `(horizontal, vertical, diagonal)`.
    pub fn into_parts(self) -> (OrientationGroup, OrientationGroup, Vec<Segment>) {
        (self.horizontal, self.vertical, self.diagonal)
    }
}
