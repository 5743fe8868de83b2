//! Overlap resolution for collinear segment groups.
//!
//! This module implements the core of the crate: given an unordered
//! collection of segments, it decides which portions are drawn by more than
//! one input segment (overlap) and which by exactly one (unique).
//!
//! # Algorithm
//!
//! Segments are first partitioned by [`SegmentGroups`]. Each horizontal and
//! vertical group is then resolved independently with a worklist:
//!
//! 1. Pop the front segment `current`.
//! 2. Scan the rest of the worklist for the first `other` whose
//!    [significant overlap](Segment::significant_overlap_with) with `current`
//!    exists.
//! 3. On a match, record the overlap, remove `other`, and push the remainders
//!    of `current` and `other` to the back. `current` is consumed.
//! 4. Without a match, `current` is unique.
//!
//! Every match removes two segments and replaces them with pieces whose total
//! length is smaller by at least twice [`MIN_SEGMENT_LENGTH`], so the loop
//! always terminates.
//!
//! Diagonal segments skip the worklist and go straight to the unique set.
//! The combined candidates are finally passed through [`deduplicate`].
//!
//! [`MIN_SEGMENT_LENGTH`]: crate::segment::MIN_SEGMENT_LENGTH

use std::collections::VecDeque;

use log::{debug, trace};

use crate::{
    dedup::{contains_tolerance_equal, deduplicate},
    group::SegmentGroups,
    segment::{Orientation, Segment},
};

/// The outcome of overlap resolution: two disjoint segment collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    unique: Vec<Segment>,
    overlap: Vec<Segment>,
}

impl Resolution {
    pub(crate) fn new(unique: Vec<Segment>, overlap: Vec<Segment>) -> Self {
        Self { unique, overlap }
    }

    /// Segments drawn by exactly one input segment.
    pub fn unique(&self) -> &[Segment] {
        &self.unique
    }

    /// Segments shared by more than one input segment.
    pub fn overlap(&self) -> &[Segment] {
        &self.overlap
    }

    /// Returns true if both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.unique.is_empty() && self.overlap.is_empty()
    }

    /// Consumes the resolution, returning `(unique, overlap)`.
    pub fn into_parts(self) -> (Vec<Segment>, Vec<Segment>) {
        (self.unique, self.overlap)
    }
}

/// Resolves overlapping collinear segments.
///
/// This is a pure function: no I/O and no state shared between calls.
///
/// # Examples
///
/// ```
/// # use boxcut_core::{resolve::resolve, segment::Segment};
/// let resolution = resolve([
///     Segment::new(0.0, 0.0, 10.0, 0.0),
///     Segment::new(5.0, 0.0, 15.0, 0.0),
/// ]);
///
/// assert_eq!(resolution.overlap(), &[Segment::new(5.0, 0.0, 10.0, 0.0)]);
/// assert_eq!(
///     resolution.unique(),
///     &[Segment::new(0.0, 0.0, 5.0, 0.0), Segment::new(10.0, 0.0, 15.0, 0.0)]
/// );
/// ```
pub fn resolve(segments: impl IntoIterator<Item = Segment>) -> Resolution {
    let (horizontal, vertical, diagonal) = SegmentGroups::from_segments(segments).into_parts();

    debug!(
        horizontal_groups = horizontal.len(),
        vertical_groups = vertical.len(),
        diagonal = diagonal.len();
        "Resolving segment groups"
    );

    let mut unique = Vec::new();
    let mut overlap = Vec::new();

    let groups = horizontal
        .into_iter()
        .map(|(key, group)| (Orientation::Horizontal, key, group))
        .chain(
            vertical
                .into_iter()
                .map(|(key, group)| (Orientation::Vertical, key, group)),
        );

    for (orientation, key, group) in groups {
        let resolved = GroupResolver::new(orientation, group).run();
        trace!(
            orientation:?,
            key,
            unique = resolved.unique.len(),
            overlap = resolved.overlap.len();
            "Resolved group"
        );

        unique.extend(resolved.unique);
        overlap.extend(resolved.overlap);
    }

    unique.extend(diagonal);

    deduplicate(unique, overlap)
}

/// Worklist and accumulators for one collinear group.
struct GroupResolver {
    worklist: VecDeque<Segment>,
    unique: Vec<Segment>,
    overlap: Vec<Segment>,
}

impl GroupResolver {
    fn new(orientation: Orientation, mut group: Vec<Segment>) -> Self {
        match orientation {
            Orientation::Vertical => group.sort_by(|a, b| a.y1().total_cmp(&b.y1())),
            _ => group.sort_by(|a, b| a.x1().total_cmp(&b.x1())),
        }

        Self {
            worklist: group.into(),
            unique: Vec::new(),
            overlap: Vec::new(),
        }
    }

    fn run(mut self) -> Resolution {
        while let Some(current) = self.worklist.pop_front() {
            let Some((index, shared)) = self.first_overlap(&current) else {
                self.unique.push(current);
                continue;
            };

            if !contains_tolerance_equal(&self.overlap, &shared) {
                self.overlap.push(shared);
            }

            // `index` was found by scanning the same worklist.
            let Some(other) = self.worklist.remove(index) else {
                continue;
            };

            self.worklist.extend(current.subtract(&shared));
            self.worklist.extend(other.subtract(&shared));
        }

        Resolution::new(self.unique, self.overlap)
    }

    /// Finds the first worklist entry with a significant overlap.
    fn first_overlap(&self, current: &Segment) -> Option<(usize, Segment)> {
        self.worklist
            .iter()
            .enumerate()
            .find_map(|(index, other)| {
                current
                    .significant_overlap_with(other)
                    .map(|shared| (index, shared))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(x1: f64, x2: f64) -> Segment {
        Segment::new(x1, 0.0, x2, 0.0)
    }

    fn v(y1: f64, y2: f64) -> Segment {
        Segment::new(0.0, y1, 0.0, y2)
    }

    #[test]
    fn test_empty_input() {
        let resolution = resolve([]);
        assert!(resolution.is_empty());
    }

    #[test]
    fn test_partial_overlap() {
        let (unique, overlap) = resolve([h(0.0, 10.0), h(5.0, 15.0)]).into_parts();
        assert_eq!(overlap, vec![h(5.0, 10.0)]);
        assert_eq!(unique, vec![h(0.0, 5.0), h(10.0, 15.0)]);
    }

    #[test]
    fn test_touching_segments_stay_unique() {
        let (unique, overlap) = resolve([h(0.0, 5.0), h(5.0, 10.0)]).into_parts();
        assert!(overlap.is_empty());
        assert_eq!(unique, vec![h(0.0, 5.0), h(5.0, 10.0)]);
    }

    #[test]
    fn test_three_collinear_segments() {
        let (unique, overlap) = resolve([h(0.0, 10.0), h(3.0, 7.0), h(6.0, 12.0)]).into_parts();

        assert_eq!(overlap, vec![h(3.0, 7.0), h(7.0, 10.0)]);
        assert_eq!(unique, vec![h(0.0, 3.0), h(6.0, 7.0), h(10.0, 12.0)]);
        assert!(unique.iter().chain(&overlap).all(|s| !s.is_degenerate()));
    }

    #[test]
    fn test_crossing_orientations() {
        let horizontal = Segment::new(0.0, 5.0, 10.0, 5.0);
        let vertical = Segment::new(5.0, 0.0, 5.0, 10.0);

        let (unique, overlap) = resolve([horizontal, vertical]).into_parts();
        assert!(overlap.is_empty());
        assert_eq!(unique, vec![horizontal, vertical]);
    }

    #[test]
    fn test_identical_segments_become_overlap() {
        let (unique, overlap) = resolve([h(0.0, 10.0), h(10.0, 0.0)]).into_parts();
        assert!(unique.is_empty());
        assert_eq!(overlap, vec![h(0.0, 10.0)]);
    }

    #[test]
    fn test_vertical_overlap() {
        let (unique, overlap) = resolve([v(4.0, 12.0), v(0.0, 8.0)]).into_parts();
        assert_eq!(overlap, vec![v(4.0, 8.0)]);
        assert_eq!(unique, vec![v(0.0, 4.0), v(8.0, 12.0)]);
    }

    #[test]
    fn test_contained_segment() {
        let (unique, overlap) = resolve([h(0.0, 10.0), h(2.0, 4.0)]).into_parts();
        assert_eq!(overlap, vec![h(2.0, 4.0)]);
        assert_eq!(unique, vec![h(0.0, 2.0), h(4.0, 10.0)]);
    }

    #[test]
    fn test_sliver_overlap_is_ignored() {
        let (unique, overlap) = resolve([h(0.0, 5.0), h(4.95, 10.0)]).into_parts();
        assert!(overlap.is_empty());
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_sliver_remainder_is_dropped() {
        let (unique, overlap) = resolve([h(0.0, 10.0), h(0.05, 10.0)]).into_parts();
        assert_eq!(overlap, vec![h(0.05, 10.0)]);
        assert!(unique.is_empty());
    }

    #[test]
    fn test_diagonals_pass_through() {
        let diagonal = Segment::new(0.0, 5.0, 15.0, 0.0);
        let (unique, overlap) = resolve([diagonal, h(0.0, 1.0)]).into_parts();
        assert!(overlap.is_empty());
        assert_eq!(unique, vec![h(0.0, 1.0), diagonal]);
    }

    #[test]
    fn test_separate_lines_do_not_interact() {
        let upper = Segment::new(0.0, 1.0, 10.0, 1.0);
        let lower = Segment::new(0.0, 2.0, 10.0, 2.0);
        let (unique, overlap) = resolve([upper, lower]).into_parts();
        assert!(overlap.is_empty());
        assert_eq!(unique, vec![upper, lower]);
    }

    #[test]
    fn test_adjacent_rectangles_share_edge() {
        // Two 10x10 squares side by side share the edge at x = 10.
        let left = [
            Segment::new(0.0, 0.0, 10.0, 0.0),
            Segment::new(10.0, 0.0, 10.0, 10.0),
            Segment::new(0.0, 10.0, 10.0, 10.0),
            Segment::new(0.0, 0.0, 0.0, 10.0),
        ];
        let right = [
            Segment::new(10.0, 0.0, 20.0, 0.0),
            Segment::new(20.0, 0.0, 20.0, 10.0),
            Segment::new(10.0, 10.0, 20.0, 10.0),
            Segment::new(10.0, 0.0, 10.0, 10.0),
        ];

        let (unique, overlap) = resolve(left.into_iter().chain(right)).into_parts();
        assert_eq!(overlap, vec![Segment::new(10.0, 0.0, 10.0, 10.0)]);
        assert_eq!(unique.len(), 6);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::segment::{MIN_SEGMENT_LENGTH, TOLERANCE};

    fn segment_strategy() -> impl Strategy<Value = Segment> {
        // Small integer grid so collinear overlaps are common.
        (0u8..3, 0i32..4, 0i32..20, 1i32..20).prop_map(|(kind, line, start, len)| {
            let line = f64::from(line) * 5.0;
            let start = f64::from(start);
            let end = start + f64::from(len);
            match kind {
                0 => Segment::new(start, line, end, line),
                1 => Segment::new(line, start, line, end),
                _ => Segment::new(start, line, end, line + f64::from(len) / 2.0),
            }
        })
    }

    fn segments_strategy() -> impl Strategy<Value = Vec<Segment>> {
        prop::collection::vec(segment_strategy(), 0..12)
    }

    /// No unique segment equals an overlap segment.
    fn check_results_are_disjoint(segments: Vec<Segment>) -> Result<(), TestCaseError> {
        let resolution = resolve(segments);
        for segment in resolution.unique() {
            prop_assert!(!contains_tolerance_equal(resolution.overlap(), segment));
        }
        Ok(())
    }

    /// Nothing at or below the significance threshold is ever reported.
    fn check_no_degenerate_output(segments: Vec<Segment>) -> Result<(), TestCaseError> {
        let resolution = resolve(segments);
        for segment in resolution.unique().iter().chain(resolution.overlap()) {
            prop_assert!(segment.length() > MIN_SEGMENT_LENGTH);
        }
        Ok(())
    }

    /// Reversing a pair of inputs gives the same overlap and remainder count.
    fn check_pair_symmetry(a: Segment, b: Segment) -> Result<(), TestCaseError> {
        let forward = resolve([a, b]);
        let backward = resolve([b, a]);

        prop_assert_eq!(forward.overlap(), backward.overlap());
        prop_assert_eq!(forward.unique().len(), backward.unique().len());
        Ok(())
    }

    /// Segments on distinct lines come back unchanged.
    fn check_disjoint_input_is_unchanged(lines: Vec<(i32, i32)>) -> Result<(), TestCaseError> {
        let segments: Vec<Segment> = lines
            .iter()
            .enumerate()
            .map(|(i, &(start, len))| {
                let y = i as f64 * 3.0;
                Segment::new(f64::from(start), y, f64::from(start + len), y)
            })
            .collect();

        let resolution = resolve(segments.clone());
        prop_assert!(resolution.overlap().is_empty());
        prop_assert_eq!(resolution.unique(), segments.as_slice());
        Ok(())
    }

    /// Whether `segment` lies on `line` in `orientation` and covers `pos`.
    fn covers_point(segment: &Segment, orientation: Orientation, line: f64, pos: f64) -> bool {
        if segment.orientation() != orientation {
            return false;
        }
        let (across, start, end) = match orientation {
            Orientation::Vertical => (segment.x1(), segment.y1(), segment.y2()),
            _ => (segment.y1(), segment.x1(), segment.x2()),
        };
        (across - line).abs() < TOLERANCE && start <= pos && pos <= end
    }

    /// Whether `pos` is within the sliver threshold of an endpoint on `line`.
    fn near_endpoint(
        segments: &[Segment],
        orientation: Orientation,
        line: f64,
        pos: f64,
    ) -> bool {
        segments
            .iter()
            .filter(|segment| segment.orientation() == orientation)
            .filter_map(|segment| match orientation {
                Orientation::Vertical if (segment.x1() - line).abs() < TOLERANCE => {
                    Some([segment.y1(), segment.y2()])
                }
                Orientation::Horizontal if (segment.y1() - line).abs() < TOLERANCE => {
                    Some([segment.x1(), segment.x2()])
                }
                _ => None,
            })
            .flatten()
            .any(|end| (end - pos).abs() <= MIN_SEGMENT_LENGTH)
    }

    /// Every point of an axis-aligned line is covered by the output iff it
    /// was covered by the input; diagonals pass through unchanged.
    fn check_coverage_is_conserved(segments: Vec<Segment>) -> Result<(), TestCaseError> {
        let resolution = resolve(segments.clone());
        let output: Vec<Segment> = resolution
            .unique()
            .iter()
            .chain(resolution.overlap())
            .copied()
            .collect();
        let endpoints: Vec<Segment> = segments.iter().chain(&output).copied().collect();

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for line in (0..4).map(|i| f64::from(i) * 5.0) {
                for step in 0..=800 {
                    let pos = f64::from(step) * 0.05;
                    if near_endpoint(&endpoints, orientation, line, pos) {
                        continue;
                    }

                    let before = segments
                        .iter()
                        .any(|segment| covers_point(segment, orientation, line, pos));
                    let after = output
                        .iter()
                        .any(|segment| covers_point(segment, orientation, line, pos));
                    prop_assert_eq!(
                        before,
                        after,
                        "coverage changed at {:?} line {} pos {}",
                        orientation,
                        line,
                        pos
                    );
                }
            }
        }

        let input_diagonals: Vec<&Segment> =
            segments.iter().filter(|segment| segment.is_diagonal()).collect();
        let output_diagonals: Vec<&Segment> = output
            .iter()
            .filter(|segment| segment.is_diagonal())
            .collect();
        for diagonal in &input_diagonals {
            prop_assert!(resolution.unique().contains(*diagonal));
        }
        for diagonal in &output_diagonals {
            prop_assert!(input_diagonals.contains(diagonal));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn coverage_is_conserved(segments in segments_strategy()) {
            check_coverage_is_conserved(segments)?;
        }

        #[test]
        fn results_are_disjoint(segments in segments_strategy()) {
            check_results_are_disjoint(segments)?;
        }

        #[test]
        fn no_degenerate_output(segments in segments_strategy()) {
            check_no_degenerate_output(segments)?;
        }

        #[test]
        fn pair_symmetry(a in segment_strategy(), b in segment_strategy()) {
            check_pair_symmetry(a, b)?;
        }

        #[test]
        fn disjoint_input_is_unchanged(lines in prop::collection::vec((0i32..50, 1i32..50), 0..10)) {
            check_disjoint_input_is_unchanged(lines)?;
        }
    }
}
