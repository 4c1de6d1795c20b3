//! Crossing grouping stage: collapses clusters of near duplicate crossings (e.g. a segment
//! grazing two overlapping occluders at nearly the same spot) into one representative crossing,
//! avoiding over-fragmenting a segment near clustered crossings.
use super::{
    intersects::Crossing,
    types::{GROUP_MERGE_FACTOR, PRIORITY_WIN_GAP},
};
use crate::core::{
    math::{dist, Vector2},
    traits::Real,
};

/// Merges crossings closer together than `GROUP_MERGE_FACTOR` times the clearance distance into
/// one representative crossing each.
///
/// `crossings` must be sorted by distance from the segment's start point (the order produced by
/// [find_crossings](super::intersects::find_crossings)); the output preserves that order.
///
/// Representative selection per group: a member whose occluder `z_index` beats every other
/// member by more than `PRIORITY_WIN_GAP` wins outright; otherwise the member closest to the
/// segment's start wins. Groups of more than two members additionally average all member points
/// into the representative to smooth out jitter from near coincident occluders.
pub fn group_crossings<T>(crossings: Vec<Crossing<T>>, clearance: T) -> Vec<Crossing<T>>
where
    T: Real,
{
    if crossings.len() < 2 {
        return crossings;
    }

    let merge_dist = T::from_f64(GROUP_MERGE_FACTOR) * clearance;

    let mut result = Vec::with_capacity(crossings.len());
    let mut group: Vec<Crossing<T>> = Vec::new();

    for crossing in crossings {
        if let Some(previous) = group.last() {
            if dist(previous.point, crossing.point) > merge_dist {
                result.push(group_representative(&group));
                group.clear();
            }
        }
        group.push(crossing);
    }
    result.push(group_representative(&group));

    result
}

/// Selects the representative crossing of a non-empty group.
fn group_representative<T>(group: &[Crossing<T>]) -> Crossing<T>
where
    T: Real,
{
    debug_assert!(!group.is_empty(), "crossing group is never empty");

    if group.len() == 1 {
        return group[0];
    }

    let win_gap = T::from_f64(PRIORITY_WIN_GAP);
    let strict_winner = group.iter().enumerate().find(|(i, candidate)| {
        group
            .iter()
            .enumerate()
            .filter(|(j, _)| j != i)
            .all(|(_, other)| other.touched_z_index - candidate.touched_z_index > win_gap)
    });

    // no strict priority winner: the member closest to the segment start (first in sorted
    // order) wins
    let mut representative = strict_winner.map(|(_, c)| *c).unwrap_or(group[0]);

    if group.len() > 2 {
        // smooth out jitter from near coincident occluders
        let sum = group
            .iter()
            .fold(Vector2::new(T::zero(), T::zero()), |acc, c| acc + c.point);
        representative.point = sum.scale(T::one() / T::from_usize(group.len()));
    }

    representative
}
