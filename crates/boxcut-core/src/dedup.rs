//! Duplicate suppression and sliver filtering for resolved segments.
//!
//! This is the final stage of overlap resolution. It guarantees that the
//! unique and overlap collections are disjoint, that neither holds two
//! tolerance-equal segments, and that no degenerate sliver survives.

use log::debug;

use crate::{resolve::Resolution, segment::Segment};

/// Returns true if `haystack` holds a segment tolerance-equal to `needle`.
///
/// This is a linear scan. Inputs are a few hundred segments at most, so a
/// spatial index has not been needed.
pub fn contains_tolerance_equal(haystack: &[Segment], needle: &Segment) -> bool {
    haystack.iter().any(|existing| existing == needle)
}

/// Filters and merges the candidate collections produced by the resolver.
///
/// - Segments no longer than [`MIN_SEGMENT_LENGTH`] are dropped from both.
/// - Overlap segments keep their first occurrence among tolerance-equal duplicates.
/// - Unique segments that equal any overlap segment are dropped; overlap wins.
/// - Unique segments also keep only their first occurrence.
///
/// [`MIN_SEGMENT_LENGTH`]: crate::segment::MIN_SEGMENT_LENGTH
pub fn deduplicate(unique: Vec<Segment>, overlap: Vec<Segment>) -> Resolution {
    let candidate_unique = unique.len();
    let candidate_overlap = overlap.len();

    let mut final_overlap: Vec<Segment> = Vec::with_capacity(overlap.len());
    for segment in overlap {
        if !segment.is_degenerate() && !contains_tolerance_equal(&final_overlap, &segment) {
            final_overlap.push(segment);
        }
    }

    let mut final_unique: Vec<Segment> = Vec::with_capacity(unique.len());
    for segment in unique {
        if !segment.is_degenerate()
            && !contains_tolerance_equal(&final_overlap, &segment)
            && !contains_tolerance_equal(&final_unique, &segment)
        {
            final_unique.push(segment);
        }
    }

    debug!(
        candidate_unique,
        candidate_overlap,
        unique = final_unique.len(),
        overlap = final_overlap.len();
        "Deduplicated resolution"
    );

    Resolution::new(final_unique, final_overlap)
}
