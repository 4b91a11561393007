//! Square candidate regions explored by the pole search.

use crate::distance::BoundaryDistance;
use crate::primitives::Point2;
use num_traits::Float;

/// A square region of the plane together with its oracle reading.
///
/// `distance` is the signed boundary distance at the center and `bound` is
/// `distance + half_size * sqrt(2)`: no point inside the square can be
/// further from the boundary than its center plus the half-diagonal.
///
/// Cells are values. Subdividing one produces four new cells and leaves the
/// parent untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<F> {
    center: Point2<F>,
    half_size: F,
    distance: F,
    bound: F,
}

impl<F: Float> Cell<F> {
    /// Evaluates the oracle once at `center` and derives the bound.
    ///
    /// A negative `half_size` is clamped to zero.
    pub fn new<O>(center: Point2<F>, half_size: F, oracle: &O) -> Self
    where
        O: BoundaryDistance<F> + ?Sized,
    {
        let half_size = half_size.max(F::zero());
        let distance = oracle.signed_distance(center);
        let sqrt_2 = (F::one() + F::one()).sqrt();
        Self {
            center,
            half_size,
            distance,
            bound: distance + half_size * sqrt_2,
        }
    }

    /// A zero-size cell: its bound equals its distance.
    pub fn point<O>(center: Point2<F>, oracle: &O) -> Self
    where
        O: BoundaryDistance<F> + ?Sized,
    {
        Self::new(center, F::zero(), oracle)
    }

    /// Splits the cell into its four quadrants.
    ///
    /// Children come in the order (-x, -y), (+x, -y), (-x, +y), (+x, +y).
    pub fn subdivide<O>(&self, oracle: &O) -> [Self; 4]
    where
        O: BoundaryDistance<F> + ?Sized,
    {
        let h = self.half_size / (F::one() + F::one());
        let Point2 { x, y } = self.center;
        [
            Self::new(Point2::new(x - h, y - h), h, oracle),
            Self::new(Point2::new(x + h, y - h), h, oracle),
            Self::new(Point2::new(x - h, y + h), h, oracle),
            Self::new(Point2::new(x + h, y + h), h, oracle),
        ]
    }

    /// Center of the square.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.center
    }

    /// Half the side length.
    #[inline]
    pub fn half_size(&self) -> F {
        self.half_size
    }

    /// Signed boundary distance at the center.
    #[inline]
    pub fn distance(&self) -> F {
        self.distance
    }

    /// Upper bound on the boundary distance anywhere in the square.
    #[inline]
    pub fn bound(&self) -> F {
        self.bound
    }
}
