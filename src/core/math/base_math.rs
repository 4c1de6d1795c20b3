use super::Vector2;
use crate::core::traits::Real;

/// Returns the value pair `(v1, v2)` given ordered as `(min, max)`.
///
/// Avoids method resolution on `min`/`max` for types whose trait bounds supply more than one
/// candidate.
///
/// # Examples
///
/// ```
/// # use line_occlusion::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Distance between the points `p0` and `p1`.
#[inline]
pub fn dist<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    dist_squared(p0, p1).sqrt()
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    p0 + v.scale(c1 / c2)
}

/// Distance from `point` to the closest point on the line segment from `p0` to `p1`.
#[inline]
pub fn dist_to_seg<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    dist(point, seg_closest_point(p0, p1, point))
}

/// Tests if `point` lies between `p0` and `p1` on the segment connecting them.
///
/// Uses the sum-of-distances collinearity check: the point is on the segment when
/// `dist(p0, point) + dist(point, p1)` does not exceed the segment length by more than
/// `tolerance`.
///
/// # Examples
///
/// ```
/// # use line_occlusion::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(10.0, 0.0);
/// assert!(point_within_seg(p0, p1, Vector2::new(5.0, 0.0), 0.1));
/// assert!(!point_within_seg(p0, p1, Vector2::new(15.0, 0.0), 0.1));
/// assert!(!point_within_seg(p0, p1, Vector2::new(5.0, 3.0), 0.1));
/// ```
#[inline]
pub fn point_within_seg<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, tolerance: T) -> bool
where
    T: Real,
{
    let seg_length = dist(p0, p1);
    let dist_sum = dist(p0, point) + dist(point, p1);
    (dist_sum - seg_length).abs() <= tolerance
}

/// Acute angle in radians between the support lines of two direction vectors.
///
/// The result is folded into `[0, PI/2]`: opposing directions count as parallel (angle 0).
/// Both vectors being zero length yields 0. This is the same quantity as the slope formula
/// `atan(|(m2 - m1) / (1 + m1 * m2)|)` but remains defined for vertical segments.
#[inline]
pub fn line_angle_between<T>(dir1: Vector2<T>, dir2: Vector2<T>) -> T
where
    T: Real,
{
    dir1.perp_dot(dir2).abs().atan2(dir1.dot(dir2).abs())
}
