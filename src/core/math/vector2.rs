use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point/vector with `x` and `y` components.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Vector2::new(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalize the vector (length = 1).
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Fuzzy equal comparison with another vector using the `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T: Real> ops::Add for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Real> ops::Sub for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}
