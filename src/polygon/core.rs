//! Core polygon types and basic ring operations.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A polygon with an exterior ring and zero or more holes.
///
/// Rings are implicitly closed (the last vertex connects to the first). A
/// trailing vertex equal to the first one is dropped on construction, so
/// explicitly closed input such as GeoJSON rings is accepted as-is. Winding
/// order does not matter to any operation here.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    exterior: Vec<Point2<F>>,
    holes: Vec<Vec<Point2<F>>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon without holes.
    pub fn new(exterior: Vec<Point2<F>>) -> Self {
        Self::with_holes(exterior, Vec::new())
    }

    /// Creates a polygon with holes.
    pub fn with_holes(exterior: Vec<Point2<F>>, holes: Vec<Vec<Point2<F>>>) -> Self {
        Self {
            exterior: open_ring(exterior),
            holes: holes.into_iter().map(open_ring).collect(),
        }
    }

    /// Creates a polygon from a list of rings; the first is the exterior.
    ///
    /// An empty list gives a polygon with an empty exterior, which
    /// [`validate_polygon`](super::validate_polygon) rejects.
    pub fn from_rings(rings: Vec<Vec<Point2<F>>>) -> Self {
        let mut rings = rings.into_iter();
        let exterior = rings.next().unwrap_or_default();
        Self::with_holes(exterior, rings.collect())
    }

    /// Creates a polygon from rings of `(x, y)` tuples; the first is the exterior.
    pub fn from_coords(rings: &[Vec<(F, F)>]) -> Self {
        Self::from_rings(
            rings
                .iter()
                .map(|ring| ring.iter().copied().map(Point2::from).collect())
                .collect(),
        )
    }

    /// Returns the exterior ring.
    #[inline]
    pub fn exterior(&self) -> &[Point2<F>] {
        &self.exterior
    }

    /// Returns the holes.
    #[inline]
    pub fn holes(&self) -> &[Vec<Point2<F>>] {
        &self.holes
    }

    /// Iterates over all rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &[Point2<F>]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Iterates over every edge of every ring, including each closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.rings().flat_map(|ring| ring_edges(ring))
    }

    /// Returns the total number of edges over all rings.
    pub fn edge_count(&self) -> usize {
        self.rings().map(<[Point2<F>]>::len).sum()
    }

    /// Returns `true` if the exterior has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Returns the bounding box of the exterior ring.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.exterior.iter().copied())
    }

    /// Returns the area enclosed by the exterior minus the area of the holes.
    pub fn area(&self) -> F {
        let holes = self
            .holes
            .iter()
            .fold(F::zero(), |acc, h| acc + ring_area(h));
        ring_area(&self.exterior) - holes
    }

    /// Returns the area-weighted centroid with holes subtracted.
    ///
    /// Returns `None` when the net area is zero.
    pub fn centroid(&self) -> Option<Point2<F>> {
        let (ext_area, ext_moment) = ring_moment(&self.exterior);
        let mut area = ext_area.abs();
        let sign = ext_area.signum();
        let mut mx = ext_moment.x * sign;
        let mut my = ext_moment.y * sign;

        for hole in &self.holes {
            let (hole_area, hole_moment) = ring_moment(hole);
            let sign = hole_area.signum();
            area = area - hole_area.abs();
            mx = mx - hole_moment.x * sign;
            my = my - hole_moment.y * sign;
        }

        if area.abs() <= F::epsilon() {
            return None;
        }
        Some(Point2::new(mx / area, my / area))
    }

    /// Tests if a point is inside the polygon (inside the exterior and
    /// outside every hole).
    ///
    /// Points on the boundary may return either true or false.
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.rings()
            .fold(false, |inside, ring| inside ^ ring_contains(ring, point))
    }

    /// Returns the total length of all rings.
    pub fn perimeter(&self) -> F {
        self.edges().fold(F::zero(), |acc, e| acc + e.length())
    }
}

/// Drops an explicit closing vertex.
fn open_ring<F: Float>(mut ring: Vec<Point2<F>>) -> Vec<Point2<F>> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Iterates over the edges of one implicitly closed ring.
pub(crate) fn ring_edges<F: Float>(ring: &[Point2<F>]) -> impl Iterator<Item = Segment2<F>> + '_ {
    let n = ring.len();
    (0..n).map(move |i| Segment2::new(ring[i], ring[(i + 1) % n]))
}

/// Computes the signed area of a ring using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn ring_signed_area<F: Float>(ring: &[Point2<F>]) -> F {
    if ring.len() < 3 {
        return F::zero();
    }

    let two = F::one() + F::one();
    ring_edges(ring).fold(F::zero(), |acc, e| {
        acc + e.start.x * e.end.y - e.end.x * e.start.y
    }) / two
}

/// Computes the absolute area of a ring.
pub fn ring_area<F: Float>(ring: &[Point2<F>]) -> F {
    ring_signed_area(ring).abs()
}

/// Signed area and first moment of area of a ring.
///
/// The centroid of the ring alone is `moment / area`.
fn ring_moment<F: Float>(ring: &[Point2<F>]) -> (F, Point2<F>) {
    if ring.len() < 3 {
        return (F::zero(), Point2::origin());
    }

    let two = F::one() + F::one();
    let six = two * (two + F::one());
    let mut cx = F::zero();
    let mut cy = F::zero();
    for e in ring_edges(ring) {
        let cross = e.start.x * e.end.y - e.end.x * e.start.y;
        cx = cx + (e.start.x + e.end.x) * cross;
        cy = cy + (e.start.y + e.end.y) * cross;
    }

    (ring_signed_area(ring), Point2::new(cx / six, cy / six))
}

/// Computes the centroid of a single ring.
///
/// Returns None for degenerate rings (fewer than 3 vertices or zero area).
pub fn ring_centroid<F: Float>(ring: &[Point2<F>]) -> Option<Point2<F>> {
    let (area, moment) = ring_moment(ring);
    if area.abs() <= F::epsilon() {
        return None;
    }
    Some(Point2::new(moment.x / area, moment.y / area))
}

/// Tests if a point is inside a ring using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn ring_contains<F: Float>(ring: &[Point2<F>], point: Point2<F>) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = ring.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = ring[i];
        let vj = ring[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
