use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// No crossing. Covers disjoint segments as well as parallel and collinear segments:
    /// overlapping collinear segments never produce a crossing for occlusion purposes.
    NoIntersect,
    /// True crossing between the two segments.
    TrueIntersect {
        /// Parametric value of the crossing on the first segment.
        seg1_t: T,
        /// Parametric value of the crossing on the second segment.
        seg2_t: T,
    },
}

/// Finds the true crossing between the line segments `v1->v2` and `u1->u2`.
///
/// Solves the parametric system `v1 + t * (v2 - v1) = u1 + t2 * (u2 - u1)` using perpendicular
/// products. A crossing exists iff the system's denominator is non-zero (fuzzy compared, so
/// near-parallel segments count as parallel) and both parametric values lie in `[0, 1]`.
///
/// # Examples
///
/// ```
/// # use line_occlusion::core::math::*;
/// # use line_occlusion::core::traits::*;
/// let v1 = Vector2::new(0.0, 0.0);
/// let v2 = Vector2::new(1.0, 0.0);
/// let u1 = Vector2::new(0.5, -1.0);
/// let u2 = Vector2::new(0.5, 1.0);
/// if let SegSegIntr::TrueIntersect { seg1_t, seg2_t } = seg_seg_intr(v1, v2, u1, u2) {
///     assert!(seg1_t.fuzzy_eq(0.5));
///     assert!(seg2_t.fuzzy_eq(0.5));
/// } else {
///     unreachable!("expected true intersect between line segments");
/// }
/// ```
pub fn seg_seg_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
) -> SegSegIntr<T>
where
    T: Real,
{
    // http://geomalgorithms.com/a05-_intersect-1.html
    // http://mathworld.wolfram.com/PerpDotProduct.html
    let v = v2 - v1;
    let u = u2 - u1;
    let denominator = v.perp_dot(u);
    if denominator.fuzzy_eq_zero() {
        // parallel or collinear (overlapping segments intentionally excluded)
        return SegSegIntr::NoIntersect;
    }

    let w = v1 - u1;
    let seg1_t = u.perp_dot(w) / denominator;
    let seg2_t = v.perp_dot(w) / denominator;

    if seg1_t < T::zero() || seg1_t > T::one() || seg2_t < T::zero() || seg2_t > T::one() {
        return SegSegIntr::NoIntersect;
    }

    SegSegIntr::TrueIntersect { seg1_t, seg2_t }
}
