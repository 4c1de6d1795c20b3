/// Trait for fuzzy equality comparisons of floating point numbers.
///
/// Exact float equality is rarely meaningful after geometric computation, so all position and
/// distance comparing in this crate goes through an epsilon tolerance supplied by this trait.
///
/// # Examples
///
/// ```
/// # use line_occlusion::core::traits::*;
/// let a = 0.1 + 0.2;
/// // exact comparison fails, fuzzy comparison succeeds
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq(0.3));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon value used when none is passed explicitly.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if this value is within `fuzzy_epsilon` of `other`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using the default [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if this value is within `fuzzy_epsilon` of zero.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using the default [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

/// Trait for fuzzy ordering comparisons of floating point numbers.
pub trait FuzzyOrd: FuzzyEq {
    /// Fuzzy greater than using the epsilon given.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Fuzzy greater than using the default [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// Fuzzy less than using the epsilon given.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Fuzzy less than using the default [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Test if `self` is between `min` and `max` inclusive with fuzzy comparing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use line_occlusion::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(1.5f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    /// Same as [FuzzyOrd::fuzzy_in_range_eps] using the default [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }

        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy!(f32, 1.0e-8);
impl_fuzzy!(f64, 1.0e-8);
