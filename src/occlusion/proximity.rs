//! Proximity trimming stage: removes sections of a segment that run close to a higher priority
//! segment without ever crossing it (e.g. two nearly parallel strokes side by side).
use super::{
    segment::{circular_index_distance, create_segment_aabb_index, Segment},
    types::{ENDPOINT_CLEARANCE_FACTOR, KEEP_BUFFER_FACTOR, MIN_FRAGMENT_LENGTH, SHORT_SEGMENT_FACTOR},
    OcclusionOptions,
};
use crate::core::{
    math::{dist, dist_to_seg, min_max, point_from_parametric, seg_seg_intr, SegSegIntr, Vector2},
    traits::Real,
};

/// Upper bound on proximity samples per segment, bounds the work for extreme length to clearance
/// ratios.
const MAX_SAMPLES: usize = 1000;

/// Runs the proximity trimming stage over the segment list.
///
/// Each segment may be dropped entirely (occluded along its whole length), pass through
/// unchanged, or split into multiple fragments. Fragments inherit the parent segment's
/// `id`/`origin`/`index`/`z_index` unchanged.
///
/// Only pairs that never cross are handled here; truly crossing pairs are left to the
/// intersection stages which cut a precise clearance gap around the crossing point.
pub fn trim_proximal_segments<T>(
    segments: &[Segment<T>],
    origin_seg_counts: &[usize],
    clearance: T,
    options: &OcclusionOptions<T>,
) -> Vec<Segment<T>>
where
    T: Real,
{
    debug_assert!(clearance > T::zero(), "clearance distance must be positive");

    let index = create_segment_aabb_index(segments);
    let two_clearance = T::two() * clearance;
    let short_length = T::from_f64(SHORT_SEGMENT_FACTOR) * clearance;
    let strict_clearance = T::from_f64(ENDPOINT_CLEARANCE_FACTOR) * clearance;

    let mut result = Vec::with_capacity(segments.len());

    for a in segments {
        let (min_x, max_x) = min_max(a.p1.x, a.p2.x);
        let (min_y, max_y) = min_max(a.p1.y, a.p2.y);
        let query_results = index.query(
            min_x - two_clearance,
            min_y - two_clearance,
            max_x + two_clearance,
            max_y + two_clearance,
        );

        let occluders: Vec<&Segment<T>> = query_results
            .iter()
            .map(|&pos| &segments[pos])
            .filter(|b| can_occlude_proximally(a, b, origin_seg_counts, two_clearance, options))
            .collect();

        if occluders.is_empty() {
            result.push(*a);
            continue;
        }

        if a.length() < short_length {
            // short segments are classified whole: fully occluded or untouched
            let fully_occluded = occluders.iter().any(|b| {
                // same origin pairs use a stricter threshold to avoid erasing shape detail
                let limit = if b.origin == a.origin {
                    strict_clearance
                } else {
                    clearance
                };
                dist_to_seg(b.p1, b.p2, a.p1) < limit
                    && dist_to_seg(b.p1, b.p2, a.p2) < limit
                    && dist_to_seg(b.p1, b.p2, a.midpoint()) < limit
            });

            if !fully_occluded {
                result.push(*a);
            }
            continue;
        }

        sample_and_split(a, &occluders, clearance, &mut result);
    }

    result
}

/// Pair filter for the proximity stage: only a strictly higher priority, unconnected,
/// non-crossing segment close enough to matter can proximally occlude `a`.
fn can_occlude_proximally<T>(
    a: &Segment<T>,
    b: &Segment<T>,
    origin_seg_counts: &[usize],
    two_clearance: T,
    options: &OcclusionOptions<T>,
) -> bool
where
    T: Real,
{
    if b.id == a.id || !b.is_in_front_of(a) {
        return false;
    }

    if a.shares_endpoint_with(b, options.pos_equal_eps) {
        return false;
    }

    if a.origin == b.origin {
        if !options.handle_self_proximity {
            return false;
        }

        let count = origin_seg_counts.get(a.origin).copied().unwrap_or(0);
        if circular_index_distance(a.index, b.index, count) <= options.self_proximity_min_distance
        {
            return false;
        }
    }

    // coarse bounding check before any finer work
    let endpoints_near = |p: Vector2<T>, q: Vector2<T>| dist(p, q) <= two_clearance;
    if !endpoints_near(a.p1, b.p1)
        && !endpoints_near(a.p1, b.p2)
        && !endpoints_near(a.p2, b.p1)
        && !endpoints_near(a.p2, b.p2)
    {
        return false;
    }

    // crossing pairs get a clearance gap from the intersection stages instead
    !matches!(
        seg_seg_intr(a.p1, a.p2, b.p1, b.p2),
        SegSegIntr::TrueIntersect { .. }
    )
}

/// Samples along `a` measuring distance to the occluders, keeps the maximal sub-ranges at
/// clearance distance or more, and emits one fragment per surviving sub-range.
fn sample_and_split<T>(
    a: &Segment<T>,
    occluders: &[&Segment<T>],
    clearance: T,
    result: &mut Vec<Segment<T>>,
) where
    T: Real,
{
    let length = a.length();
    let sample_count = (length / clearance)
        .ceil()
        .to_usize()
        .unwrap_or(MAX_SAMPLES)
        .saturating_mul(2)
        .clamp(10, MAX_SAMPLES);
    let t_step = T::one() / T::from_usize(sample_count - 1);

    let sample_clear = |i: usize| -> bool {
        let point = point_from_parametric(a.p1, a.p2, T::from_usize(i) * t_step);
        occluders
            .iter()
            .all(|b| dist_to_seg(b.p1, b.p2, point) >= clearance)
    };

    // maximal runs of clear samples as parametric ranges, each expanded by a small buffer to
    // avoid visible notches
    let t_buffer = T::from_f64(KEEP_BUFFER_FACTOR) * clearance / length;
    let mut kept_ranges: Vec<(T, T)> = Vec::new();
    let mut run_start: Option<usize> = None;

    for i in 0..=sample_count {
        if i < sample_count && sample_clear(i) {
            if run_start.is_none() {
                run_start = Some(i);
            }
            continue;
        }

        if let Some(start) = run_start.take() {
            let t0 =
                num_traits::real::Real::max(T::from_usize(start) * t_step - t_buffer, T::zero());
            let t1 =
                num_traits::real::Real::min(T::from_usize(i - 1) * t_step + t_buffer, T::one());
            match kept_ranges.last_mut() {
                // buffer expansion may make adjacent ranges touch
                Some(last) if t0 <= last.1 => last.1 = t1,
                _ => kept_ranges.push((t0, t1)),
            }
        }
    }

    for (t0, t1) in kept_ranges {
        if t0 == T::zero() && t1 == T::one() {
            result.push(*a);
            continue;
        }

        let fragment = Segment {
            p1: point_from_parametric(a.p1, a.p2, t0),
            p2: point_from_parametric(a.p1, a.p2, t1),
            ..*a
        };

        // fragments shorter than the minimum are noise
        if fragment.length() >= T::from_f64(MIN_FRAGMENT_LENGTH) {
            result.push(fragment);
        }
    }
}
