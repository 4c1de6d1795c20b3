//! Input point type, the segment data model, and the segmenter stage.
use crate::core::{
    math::{dist, midpoint, min_max, Vector2},
    traits::Real,
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input point of a multiline: planar coordinate with an optional depth hint.
///
/// The depth hint is only used to bias segment priority (lower depth = drawn in front), it does
/// not participate in any 3D visibility computation.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultilinePoint<T = f64> {
    pub x: T,
    pub y: T,
    pub depth: Option<T>,
}

impl<T> MultilinePoint<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y, depth: None }
    }

    #[inline]
    pub fn with_depth(x: T, y: T, depth: T) -> Self {
        Self {
            x,
            y,
            depth: Some(depth),
        }
    }

    /// Planar position of the point.
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Real> From<(T, T)> for MultilinePoint<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Real> From<(T, T, T)> for MultilinePoint<T> {
    #[inline]
    fn from((x, y, depth): (T, T, T)) -> Self {
        Self::with_depth(x, y, depth)
    }
}

/// One directed straight edge of a multiline, carrying identity and priority metadata.
///
/// Segments are immutable identity records: trimming never mutates a segment's metadata, it only
/// produces new endpoint-bearing fragments that carry forward the parent's
/// `id`/`origin`/`index`/`z_index` unchanged.
#[derive(Debug, Copy, Clone)]
pub struct Segment<T>
where
    T: Real,
{
    /// Start point of the segment.
    pub p1: Vector2<T>,
    /// End point of the segment.
    pub p2: Vector2<T>,
    /// Globally unique id in assignment order, stable for the lifetime of one solve.
    pub id: usize,
    /// Index of the source multiline.
    pub origin: usize,
    /// Position of the segment within its source multiline.
    pub index: usize,
    /// Priority key, lower value = drawn in front / occludes. Derived from assignment order, or
    /// from the averaged depth hints of the endpoints when supplied.
    pub z_index: T,
}

impl<T> Segment<T>
where
    T: Real,
{
    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> T {
        dist(self.p1, self.p2)
    }

    /// Direction vector from `p1` to `p2` (not normalized).
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.p2 - self.p1
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Vector2<T> {
        midpoint(self.p1, self.p2)
    }

    /// Returns true if this segment is drawn in front of `other` (and therefore may occlude it).
    ///
    /// Priority is a total order: primarily by `z_index` ascending, ties broken by `id`.
    #[inline]
    pub fn is_in_front_of(&self, other: &Self) -> bool {
        self.z_index < other.z_index || (self.z_index == other.z_index && self.id < other.id)
    }

    /// Returns true if the two segments share an endpoint within `pos_equal_eps` (connected
    /// segments are never mutually occluding).
    pub fn shares_endpoint_with(&self, other: &Self, pos_equal_eps: T) -> bool {
        self.p1.fuzzy_eq_eps(other.p1, pos_equal_eps)
            || self.p1.fuzzy_eq_eps(other.p2, pos_equal_eps)
            || self.p2.fuzzy_eq_eps(other.p1, pos_equal_eps)
            || self.p2.fuzzy_eq_eps(other.p2, pos_equal_eps)
    }
}

/// Converts input multilines into the flat ordered segment list.
///
/// Assigns `id` sequentially across all segments, `origin` as the multiline index, and `index`
/// as the segment position within its multiline. `z_index` defaults to the strictly increasing
/// assignment counter (later multilines and later segments occlude less) but switches to the
/// midpoint of the endpoints' depth hints when both carry one. A multiline carrying hints on
/// only some of its points is a degraded mode: hintless segments fall back to the counter and a
/// warning is logged once for the multiline.
///
/// Multilines with fewer than 2 points contribute no segments.
pub fn segments_from_multilines<T>(multilines: &[Vec<MultilinePoint<T>>]) -> Vec<Segment<T>>
where
    T: Real,
{
    let mut result = Vec::new();
    let mut id = 0;

    for (origin, multiline) in multilines.iter().enumerate() {
        if multiline.len() < 2 {
            continue;
        }

        let hinted_count = multiline.iter().filter(|p| p.depth.is_some()).count();
        if hinted_count != 0 && hinted_count != multiline.len() {
            log::warn!(
                "multiline {} carries depth hints on only {} of {} points, \
                 hintless segments fall back to draw order priority",
                origin,
                hinted_count,
                multiline.len()
            );
        }

        for (index, pair) in multiline.windows(2).enumerate() {
            let z_index = match (pair[0].depth, pair[1].depth) {
                (Some(d1), Some(d2)) => (d1 + d2) / T::two(),
                _ => T::from_usize(id),
            };

            result.push(Segment {
                p1: pair[0].pos(),
                p2: pair[1].pos(),
                id,
                origin,
                index,
                z_index,
            });
            id += 1;
        }
    }

    result
}

/// Number of segments contributed by each input multiline, indexed by origin.
///
/// Needed by the circular index distance rule for same-origin occlusion checks.
pub fn origin_segment_counts<T>(multilines: &[Vec<MultilinePoint<T>>]) -> Vec<usize>
where
    T: Real,
{
    multilines
        .iter()
        .map(|m| m.len().saturating_sub(1))
        .collect()
}

/// Circular index distance between segment positions `i` and `j` within a multiline of
/// `segment_count` segments, accounting for wrap-around on closed shapes.
#[inline]
pub(crate) fn circular_index_distance(i: usize, j: usize, segment_count: usize) -> usize {
    let d = i.abs_diff(j);
    if segment_count == 0 {
        return d;
    }
    d.min(segment_count - d)
}

/// Returns the `(min, max)` range of `z_index` over the segments, or `None` if empty.
///
/// Useful for callers mapping segment depth to a colour ramp when rendering.
pub fn depth_range<T>(segments: &[Segment<T>]) -> Option<(T, T)>
where
    T: Real,
{
    segments.iter().fold(None, |acc, seg| match acc {
        None => Some((seg.z_index, seg.z_index)),
        Some((min_z, max_z)) => Some((
            num_traits::real::Real::min(min_z, seg.z_index),
            num_traits::real::Real::max(max_z, seg.z_index),
        )),
    })
}

/// Creates a spatial index over the bounding boxes of all the segments.
///
/// The segment's position in the slice is the key to its bounding box in the index.
pub fn create_segment_aabb_index<T>(segments: &[Segment<T>]) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    let mut builder = StaticAABB2DIndexBuilder::new(segments.len());
    for seg in segments {
        let (min_x, max_x) = min_max(seg.p1.x, seg.p2.x);
        let (min_y, max_y) = min_max(seg.p1.y, seg.p2.y);
        builder.add(min_x, min_y, max_x, max_y);
    }

    match builder.build() {
        Ok(index) => index,
        Err(_) => unreachable!("internal library error: failed to build segment spatial index"),
    }
}
