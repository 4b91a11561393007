//! Signed distance from a point to a polygon boundary.
//!
//! The sign convention is the one used by the pole search: positive inside
//! the polygon, negative outside it or inside a hole. This is the opposite of
//! the usual SDF convention, so that "larger is better" throughout the search.

use crate::polygon::{ring_edges, Polygon};
use crate::primitives::Point2;
use num_traits::Float;

/// Shapes that can report the signed distance to their boundary.
///
/// The pole search is generic over this trait, so any shape (or any faster
/// representation of a polygon) can stand in for [`Polygon`].
pub trait BoundaryDistance<F: Float> {
    /// Returns the signed distance from `p` to the boundary.
    ///
    /// - Positive: inside
    /// - Zero: on the boundary
    /// - Negative: outside (or inside a hole)
    fn signed_distance(&self, p: Point2<F>) -> F;

    /// Returns the unsigned distance from `p` to the boundary.
    fn distance(&self, p: Point2<F>) -> F {
        self.signed_distance(p).abs()
    }

    /// Returns true if the point is strictly inside the shape.
    fn is_inside(&self, p: Point2<F>) -> bool {
        self.signed_distance(p) > F::zero()
    }
}

impl<F: Float> BoundaryDistance<F> for Polygon<F> {
    #[inline]
    fn signed_distance(&self, p: Point2<F>) -> F {
        signed_distance_to_boundary(p, self)
    }
}

impl<F: Float, T: BoundaryDistance<F> + ?Sized> BoundaryDistance<F> for &T {
    #[inline]
    fn signed_distance(&self, p: Point2<F>) -> F {
        (**self).signed_distance(p)
    }
}

/// Signed distance from `p` to the nearest edge of any ring of `polygon`.
///
/// Inside/outside is decided by even-odd ray casting over all rings at once,
/// which puts hole interiors outside. A point exactly on an edge returns zero.
///
/// # Example
///
/// ```
/// use inaccessum::distance::signed_distance_to_boundary;
/// use inaccessum::polygon::Polygon;
/// use inaccessum::Point2;
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
///
/// assert_eq!(signed_distance_to_boundary(Point2::new(1.0, 2.0), &square), 1.0);
/// assert_eq!(signed_distance_to_boundary(Point2::new(6.0, 2.0), &square), -2.0);
/// ```
pub fn signed_distance_to_boundary<F: Float>(p: Point2<F>, polygon: &Polygon<F>) -> F {
    let mut inside = false;
    let mut min_dist_sq = F::infinity();

    for ring in polygon.rings() {
        for edge in ring_edges(ring) {
            let (a, b) = (edge.start, edge.end);

            if ((a.y > p.y) != (b.y > p.y))
                && (p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x)
            {
                inside = !inside;
            }

            let dist_sq = edge.distance_squared_to_point(p);
            if dist_sq < min_dist_sq {
                min_dist_sq = dist_sq;
            }
        }
    }

    let dist = min_dist_sq.sqrt();

    if inside || dist == F::zero() {
        dist
    } else {
        -dist
    }
}
