//! Offsets between points.

use num_traits::Float;
use std::ops::Mul;

/// The offset from one point to another, as produced by `Point2 - Point2`.
///
/// Only what edge projection needs lives here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length; compare these instead of lengths to skip the sqrt.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, t: F) -> Self {
        Self::new(self.x * t, self.y * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_of_perpendicular_offsets_is_zero() {
        let east: Vec2<f64> = Vec2::new(2.0, 0.0);
        let north = Vec2::new(0.0, -3.0);
        assert_eq!(east.dot(north), 0.0);
        assert_eq!(east.dot(east), 4.0);
    }

    #[test]
    fn test_scaled_offset_length() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0) * 0.5;
        assert_eq!(v, Vec2::new(1.5, 2.0));
        assert_eq!(v.magnitude_squared(), 6.25);
    }
}
