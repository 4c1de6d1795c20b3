//! Intersection resolving stage: finds the true geometric crossings of a segment against the
//! segment list, filtered for occlusion relevance.
use super::{
    segment::{circular_index_distance, Segment},
    OcclusionOptions,
};
use crate::core::{
    math::{dist_squared, min_max, point_from_parametric, seg_seg_intr, SegSegIntr, Vector2},
    traits::Real,
};
use static_aabb2d_index::StaticAABB2DIndex;

/// A geometric crossing between the segment under test and another segment, annotated with the
/// other segment's identity and priority for occlusion decisions.
///
/// Crossings are ephemeral: computed, grouped, and consumed within one segment's trimming pass.
#[derive(Debug, Copy, Clone)]
pub struct Crossing<T>
where
    T: Real,
{
    /// Crossing point.
    pub point: Vector2<T>,
    /// `id` of the segment touched.
    pub touched_id: usize,
    /// `z_index` of the segment touched.
    pub touched_z_index: T,
    /// `origin` of the segment touched.
    pub touched_origin: usize,
}

/// Finds all occlusion relevant crossings of segment `a` against the segment list.
///
/// `index` must be a spatial index over `segments` (see
/// [create_segment_aabb_index](super::segment::create_segment_aabb_index)). Candidates are
/// filtered: a segment never crosses itself or a segment it shares an endpoint with, same-origin
/// pairs only count when self proximity handling is enabled and the pair is far enough apart in
/// circular index distance (handles self intersecting shapes such as a figure eight), and only
/// segments drawn strictly in front of `a` produce occluding crossings.
///
/// The returned crossings are sorted by distance from `a.p1` ascending, establishing a
/// deterministic along-segment processing order for the trimming stage.
pub fn find_crossings<T>(
    a: &Segment<T>,
    segments: &[Segment<T>],
    index: &StaticAABB2DIndex<T>,
    origin_seg_counts: &[usize],
    options: &OcclusionOptions<T>,
) -> Vec<Crossing<T>>
where
    T: Real,
{
    let fuzz = T::fuzzy_epsilon();
    let (min_x, max_x) = min_max(a.p1.x, a.p2.x);
    let (min_y, max_y) = min_max(a.p1.y, a.p2.y);
    let query_results = index.query(min_x - fuzz, min_y - fuzz, max_x + fuzz, max_y + fuzz);

    let mut crossings = Vec::new();
    for b in query_results.iter().map(|&pos| &segments[pos]) {
        if b.id == a.id || !b.is_in_front_of(a) {
            continue;
        }

        if a.shares_endpoint_with(b, options.pos_equal_eps) {
            continue;
        }

        if a.origin == b.origin {
            if !options.handle_self_proximity {
                continue;
            }

            let count = origin_seg_counts.get(a.origin).copied().unwrap_or(0);
            if circular_index_distance(a.index, b.index, count)
                <= options.self_proximity_min_distance
            {
                continue;
            }
        }

        if let SegSegIntr::TrueIntersect { seg1_t, .. } = seg_seg_intr(a.p1, a.p2, b.p1, b.p2) {
            crossings.push(Crossing {
                point: point_from_parametric(a.p1, a.p2, seg1_t),
                touched_id: b.id,
                touched_z_index: b.z_index,
                touched_origin: b.origin,
            });
        }
    }

    crossings.sort_by(|c1, c2| {
        dist_squared(a.p1, c1.point)
            .partial_cmp(&dist_squared(a.p1, c2.point))
            .expect("crossing distances are comparable")
    });

    crossings
}
