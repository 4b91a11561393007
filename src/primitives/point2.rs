//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point in the plane.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (self - other).magnitude_squared()
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Point2<F>> for (F, F) {
    fn from(p: Point2<F>) -> Self {
        (p.x, p.y)
    }
}
