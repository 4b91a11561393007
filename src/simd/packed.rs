//! Edge-packed polygon for batched distance queries.

use wide::f64x4;

use crate::distance::BoundaryDistance;
use crate::error::PoleError;
use crate::polygon::{validate_polygon, Polygon};
use crate::polylabel::{search, Pole, PolylabelOptions};
use crate::primitives::{Point2, Segment2};

/// Four edges, one per lane.
#[derive(Clone, Copy, Debug)]
struct EdgeBatch {
    ax: f64x4,
    ay: f64x4,
    dx: f64x4,
    dy: f64x4,
    /// Squared edge lengths, floored so degenerate edges do not divide by zero.
    len_sq: f64x4,
}

/// A polygon flattened into SIMD edge batches.
///
/// Answers the same queries as [`Polygon`] through [`BoundaryDistance`]. The
/// last batch is padded by repeating the final edge, which leaves the minimum
/// distance unchanged.
#[derive(Clone, Debug)]
pub struct PackedPolygon {
    batches: Vec<EdgeBatch>,
    edges: Vec<Segment2<f64>>,
}

impl PackedPolygon {
    /// Packs every edge of every ring.
    pub fn new(polygon: &Polygon<f64>) -> Self {
        let edges: Vec<Segment2<f64>> = polygon.edges().collect();

        let batches = edges
            .chunks(4)
            .map(|chunk| {
                let lane = |i: usize| chunk[i.min(chunk.len() - 1)];
                let (e0, e1, e2, e3) = (lane(0), lane(1), lane(2), lane(3));

                let ax = f64x4::new([e0.start.x, e1.start.x, e2.start.x, e3.start.x]);
                let ay = f64x4::new([e0.start.y, e1.start.y, e2.start.y, e3.start.y]);
                let dx = f64x4::new([e0.end.x, e1.end.x, e2.end.x, e3.end.x]) - ax;
                let dy = f64x4::new([e0.end.y, e1.end.y, e2.end.y, e3.end.y]) - ay;
                let len_sq = (dx * dx + dy * dy).max(f64x4::splat(f64::MIN_POSITIVE));

                EdgeBatch {
                    ax,
                    ay,
                    dx,
                    dy,
                    len_sq,
                }
            })
            .collect();

        Self { batches, edges }
    }

    /// Number of edges (padding excluded).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Smallest squared distance from `p` to any edge.
    fn min_distance_squared(&self, p: Point2<f64>) -> f64 {
        let px = f64x4::splat(p.x);
        let py = f64x4::splat(p.y);
        let zero = f64x4::splat(0.0);
        let one = f64x4::splat(1.0);

        let mut best = f64x4::splat(f64::INFINITY);
        for b in &self.batches {
            let wx = px - b.ax;
            let wy = py - b.ay;

            // Project onto each edge (clamped to [0, 1])
            let t = ((wx * b.dx + wy * b.dy) / b.len_sq).max(zero).min(one);

            let ex = wx - b.dx * t;
            let ey = wy - b.dy * t;
            best = best.min(ex * ex + ey * ey);
        }

        best.to_array().into_iter().fold(f64::INFINITY, f64::min)
    }

    /// Even-odd ray casting over the unpadded edges.
    fn contains(&self, p: Point2<f64>) -> bool {
        self.edges.iter().fold(false, |inside, e| {
            let (a, b) = (e.start, e.end);
            let crosses = ((a.y > p.y) != (b.y > p.y))
                && (p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x);
            inside ^ crosses
        })
    }
}

impl BoundaryDistance<f64> for PackedPolygon {
    fn signed_distance(&self, p: Point2<f64>) -> f64 {
        let dist = self.min_distance_squared(p).sqrt();
        if dist == 0.0 || self.contains(p) {
            dist
        } else {
            -dist
        }
    }
}

/// [`pole_of_inaccessibility`](crate::polylabel::pole_of_inaccessibility)
/// using the packed oracle.
pub fn polylabel_packed(
    polygon: &Polygon<f64>,
    options: &PolylabelOptions<f64>,
) -> Result<Pole<f64>, PoleError> {
    options.validate()?;
    validate_polygon(polygon)?;
    let bbox = polygon.bounding_box().ok_or(PoleError::EmptyPolygon)?;
    let packed = PackedPolygon::new(polygon);
    search(&packed, bbox, polygon.centroid(), options)
}
