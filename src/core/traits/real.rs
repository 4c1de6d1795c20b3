use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// All solver functions are generic over this trait, implemented for `f32` and `f64`. The
/// [IndexableNum] bound allows the number type to be used in the spatial index over segment
/// bounding boxes.
pub trait Real:
    num_traits::real::Real + FuzzyOrd + std::default::Default + std::fmt::Debug + IndexableNum + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Cast from an `f64` constant, panics only if the constant is not representable (never the
    /// case for `f32`/`f64`).
    #[inline]
    fn from_f64(value: f64) -> Self {
        Self::from(value).unwrap()
    }

    /// Cast from a `usize`, saturating at the maximum representable value.
    #[inline]
    fn from_usize(value: usize) -> Self {
        Self::from(value).unwrap_or_else(num_traits::real::Real::max_value)
    }
}

impl Real for f32 {}
impl Real for f64 {}
