//! Segment trimming stage: given the deduplicated, ordered crossing list for a segment,
//! computes a clearance gap around each crossing and emits the surviving visible fragments.
use super::{
    intersects::Crossing,
    segment::Segment,
    types::{ENDPOINT_CLEARANCE_FACTOR, MAX_GAP_FACTOR, MIN_CROSSING_ANGLE, ON_SEGMENT_TOLERANCE},
};
use crate::core::{
    math::{dist, dist_to_seg, line_angle_between, midpoint, point_within_seg, Vector2},
    traits::Real,
};

/// Where a segment should stop before a crossing and resume after it.
///
/// Either side may be absent: the boundary point may fall outside the segment, be suppressed by
/// the endpoint proximity rule, or the crossing may be too shallow to cut at all (both sides
/// absent, "no effect").
#[derive(Debug, Copy, Clone)]
pub struct GapEnds<T>
where
    T: Real,
{
    /// Boundary point on the `p1` side of the crossing, closing the fragment before it.
    pub before: Option<Vector2<T>>,
    /// Boundary point on the `p2` side of the crossing, opening the fragment after it.
    pub after: Option<Vector2<T>>,
}

impl<T> GapEnds<T>
where
    T: Real,
{
    const NO_EFFECT: Self = GapEnds {
        before: None,
        after: None,
    };

    #[inline]
    fn has_effect(&self) -> bool {
        self.before.is_some() || self.after.is_some()
    }
}

/// Computes the symmetric clearance gap along segment `a` centered at crossing point `point`
/// with the occluding segment `occluder`.
///
/// The along-segment offset is `clearance / sin(theta)` for crossing angle `theta` (so the
/// perpendicular clearance from the occluder reaches the clearance distance), capped at
/// `MAX_GAP_FACTOR` times the clearance to bound the gap on very shallow crossings. Crossings
/// shallower than `MIN_CROSSING_ANGLE` have no unambiguous clearance direction and produce no
/// effect rather than failing.
pub fn clearance_gap_at_crossing<T>(
    a: &Segment<T>,
    occluder: &Segment<T>,
    point: Vector2<T>,
    clearance: T,
) -> GapEnds<T>
where
    T: Real,
{
    let theta = line_angle_between(a.direction(), occluder.direction());
    if theta < T::from_f64(MIN_CROSSING_ANGLE) {
        // effectively parallel at the crossing
        return GapEnds::NO_EFFECT;
    }

    let gap_half_length = num_traits::real::Real::min(
        clearance / theta.sin(),
        T::from_f64(MAX_GAP_FACTOR) * clearance,
    );
    let unit_dir = a.direction().normalize();
    let offset = unit_dir.scale(gap_half_length);

    let on_segment = |candidate: Vector2<T>| -> Option<Vector2<T>> {
        point_within_seg(a.p1, a.p2, candidate, T::from_f64(ON_SEGMENT_TOLERANCE))
            .then_some(candidate)
    };

    let mut before = on_segment(point - offset);
    let mut after = on_segment(point + offset);

    // a boundary point next to the segment's own tip would leave a degenerate stray fragment
    // there, so when an endpoint sits close to the occluder the candidate nearer the segment's
    // visual center wins and the tip side candidate is suppressed
    let endpoint_clearance = T::from_f64(ENDPOINT_CLEARANCE_FACTOR) * clearance;
    let center = midpoint(a.p1, a.p2);
    if dist_to_seg(occluder.p1, occluder.p2, a.p1) < endpoint_clearance {
        before = suppress_tip_candidate(before, after, center);
    }
    if dist_to_seg(occluder.p1, occluder.p2, a.p2) < endpoint_clearance {
        after = suppress_tip_candidate(after, before, center);
    }

    GapEnds { before, after }
}

/// Drops `candidate` when the opposing gap candidate is closer to the segment center.
#[inline]
fn suppress_tip_candidate<T>(
    candidate: Option<Vector2<T>>,
    opposing: Option<Vector2<T>>,
    center: Vector2<T>,
) -> Option<Vector2<T>>
where
    T: Real,
{
    match (candidate, opposing) {
        (Some(c), Some(o)) if dist(o, center) < dist(c, center) => None,
        (Some(_), None) => None,
        _ => candidate,
    }
}

/// State of the fragment accumulator while walking a segment's crossings in order.
#[derive(Debug, Copy, Clone)]
enum FragState<T>
where
    T: Real,
{
    /// A fragment is open, started at the point held.
    Collecting(Vector2<T>),
    /// No fragment currently open.
    Closed,
}

/// Produces the surviving visible fragments of segment `a` given its grouped crossings and a
/// lookup from crossing to occluding segment.
///
/// Walks the crossings in along-segment order driving an accumulator state machine: the
/// `before` point of a crossing closes the open fragment (which started at the segment's
/// original start, if far enough from the first crossing, or at the previous crossing's `after`
/// point); the `after` point opens the next fragment unless it comes within one clearance
/// distance of the next crossing or of the segment's end. A segment with no crossings is
/// emitted unchanged.
pub fn trim_segment<'a, T, F>(
    a: &Segment<T>,
    crossings: &[Crossing<T>],
    occluder_lookup: F,
    clearance: T,
) -> Vec<Vec<Vector2<T>>>
where
    T: Real,
    F: Fn(&Crossing<T>) -> Option<&'a Segment<T>>,
{
    // crossings with no trimming effect do not participate in gap suppression either
    let effective: Vec<(Vector2<T>, GapEnds<T>)> = crossings
        .iter()
        .filter_map(|crossing| {
            let occluder = occluder_lookup(crossing)?;
            let gap = clearance_gap_at_crossing(a, occluder, crossing.point, clearance);
            gap.has_effect().then_some((crossing.point, gap))
        })
        .collect();

    if effective.is_empty() {
        return vec![vec![a.p1, a.p2]];
    }

    let mut fragments = Vec::new();
    let mut emit = |start: Vector2<T>, end: Vector2<T>| {
        // a fragment needs two distinct points
        if !start.fuzzy_eq(end) {
            fragments.push(vec![start, end]);
        }
    };

    let mut state = if dist(a.p1, effective[0].0) >= clearance {
        FragState::Collecting(a.p1)
    } else {
        FragState::Closed
    };

    for (i, (_, gap)) in effective.iter().enumerate() {
        if let FragState::Collecting(start) = state {
            if let Some(before) = gap.before {
                emit(start, before);
            }
            // a missing before point means the gap reaches past the open fragment's start,
            // the whole open piece is occluded and dropped
            state = FragState::Closed;
        }

        if let Some(after) = gap.after {
            let too_close_to_next = effective
                .get(i + 1)
                .is_some_and(|(next_point, _)| dist(after, *next_point) < clearance);
            let too_close_to_end = dist(after, a.p2) < clearance;
            if !too_close_to_next && !too_close_to_end {
                state = FragState::Collecting(after);
            }
        }
    }

    if let FragState::Collecting(start) = state {
        emit(start, a.p2);
    }

    fragments
}
