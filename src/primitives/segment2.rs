//! Ring edges as segments.

use super::Point2;
use num_traits::Float;

/// One edge of a ring, from `start` to `end`.
///
/// Edges are what the boundary distance is measured against; a zero-length
/// edge behaves like its single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Parameter in `[0, 1]` of the point on the edge nearest to `p`.
    ///
    /// Edges shorter than machine epsilon project everything onto `start`.
    pub fn project(self, p: Point2<F>) -> F {
        let along = self.end - self.start;
        let len_sq = along.magnitude_squared();
        if len_sq <= F::epsilon() * F::epsilon() {
            return F::zero();
        }
        ((p - self.start).dot(along) / len_sq)
            .max(F::zero())
            .min(F::one())
    }

    /// Squared distance from `p` to the nearest point of the edge.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let t = self.project(p);
        p.distance_squared(self.start.lerp(self.end, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn edge(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn test_length() {
        assert_eq!(edge(0.0, 0.0, 3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_project_clamps_to_edge() {
        let e = edge(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(e.project(Point2::new(5.0, 5.0)), 0.5, epsilon = 1e-12);
        assert_eq!(e.project(Point2::new(-5.0, 1.0)), 0.0);
        assert_eq!(e.project(Point2::new(15.0, -1.0)), 1.0);
    }

    #[test]
    fn test_distance_to_interior_and_endpoints() {
        let e = edge(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(e.distance_squared_to_point(Point2::new(5.0, 3.0)), 9.0, epsilon = 1e-12);
        // Past the end the nearest point is the vertex (10, 0).
        assert_relative_eq!(e.distance_squared_to_point(Point2::new(13.0, 4.0)), 25.0, epsilon = 1e-12);
        assert_eq!(e.distance_squared_to_point(Point2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_repeated_vertex_edge() {
        let e = edge(5.0, 5.0, 5.0, 5.0);
        assert_eq!(e.length(), 0.0);
        assert_eq!(e.project(Point2::new(0.0, 0.0)), 0.0);
        assert_eq!(e.distance_squared_to_point(Point2::new(2.0, 1.0)), 25.0);
    }
}
