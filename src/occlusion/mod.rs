//! This module has all the types and stages of the line occlusion pipeline.
//!
//! Pipeline order, each stage consuming the previous stage's output: segmenter, proximity
//! trimmer, intersection resolver, crossing grouper, segment trimmer, reconstructor. [solve]
//! runs the whole pipeline.
mod grouping;
mod intersects;
mod proximity;
mod reconstruct;
mod segment;
mod trimming;
mod types;

pub use grouping::group_crossings;
pub use intersects::{find_crossings, Crossing};
pub use proximity::trim_proximal_segments;
pub use reconstruct::reconstruct_polylines;
pub use segment::{
    create_segment_aabb_index, depth_range, origin_segment_counts, segments_from_multilines,
    MultilinePoint, Segment,
};
pub use trimming::{clearance_gap_at_crossing, trim_segment, GapEnds};
pub use types::*;

use crate::core::{math::Vector2, traits::Real};

/// Solves line occlusion over the input multilines.
///
/// The outer list order defines the default drawing priority (earlier multilines occlude later
/// ones) unless depth hints are supplied on the points. Each inner list needs at least 2 points
/// to contribute any output. The returned polylines may be more numerous than the input (one
/// source line split into several visible pieces) or fewer (extreme occlusion).
///
/// `clearance_distance` is the minimum on-canvas separation kept between a surviving stroke and
/// a stroke in front of it; it must be positive. A non-positive clearance is degenerate: no
/// trimming occurs and the input geometry is returned unchanged (a warning is logged since this
/// is a caller configuration choice, not corrupt input).
///
/// The solve is pure: no state is held between calls and independent calls may run
/// concurrently on owned data.
pub fn solve<T>(
    multilines: &[Vec<MultilinePoint<T>>],
    clearance_distance: T,
    options: &OcclusionOptions<T>,
) -> Vec<Vec<Vector2<T>>>
where
    T: Real,
{
    if clearance_distance <= T::zero() {
        log::warn!("non-positive clearance distance, returning input geometry untrimmed");
        return multilines
            .iter()
            .filter(|m| m.len() >= 2)
            .map(|m| m.iter().map(|p| p.pos()).collect())
            .collect();
    }

    let segments = segments_from_multilines(multilines);
    if segments.is_empty() {
        return Vec::new();
    }
    let origin_counts = origin_segment_counts(multilines);

    let proximal =
        trim_proximal_segments(&segments, &origin_counts, clearance_distance, options);
    if proximal.is_empty() {
        return Vec::new();
    }

    let index = create_segment_aabb_index(&proximal);

    let mut fragments = Vec::with_capacity(proximal.len());
    for a in &proximal {
        let crossings = find_crossings(a, &proximal, &index, &origin_counts, options);
        let grouped = group_crossings(crossings, clearance_distance);
        // occluder geometry is resolved against the pre-proximity list (sequential id
        // assignment makes `id` the position): the trimmer's endpoint checks must measure
        // against the occluder's full extent, not whichever proximity fragment survived
        fragments.extend(trim_segment(
            a,
            &grouped,
            |crossing: &Crossing<T>| segments.get(crossing.touched_id),
            clearance_distance,
        ));
    }

    reconstruct_polylines(fragments, T::from_f64(JOIN_DISTANCE))
}
