//! Axis-aligned bounding box of a ring.

use crate::primitives::Point2;
use num_traits::Float;

/// The box the pole search tiles with its seed cells.
///
/// The shorter side sets the seed cell size, so a box with a zero-length
/// side cannot be searched at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Smallest x and y.
    pub min: Point2<F>,
    /// Largest x and y.
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Does not check that `min <= max`.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Tightest box around `points`, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |b, p| Self {
            min: Point2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        }))
    }

    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Side length of the seed cells.
    #[inline]
    pub fn min_extent(self) -> F {
        self.width().min(self.height())
    }

    /// `true` when the box has no area to tile.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.min_extent() <= F::zero()
    }

    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }
}
