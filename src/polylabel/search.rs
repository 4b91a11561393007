//! Branch-and-bound driver for the pole of inaccessibility.
//!
//! The bounding box is tiled with square cells, each tagged with an upper
//! bound on the boundary distance reachable inside it. Cells are explored
//! best bound first; a cell whose bound cannot beat the best distance seen so
//! far by more than the precision is dropped, any other cell is split into
//! four. The search ends when nothing is left to split.

use super::cell::Cell;
use super::frontier::Frontier;
use super::options::PolylabelOptions;
use crate::bounds::Aabb2;
use crate::distance::BoundaryDistance;
use crate::error::PoleError;
use crate::polygon::{validate_polygon, Polygon};
use crate::primitives::Point2;
use num_traits::Float;
use tracing::{debug, trace, warn};

/// Counters describing how a search went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Cells taken off the frontier.
    pub iterations: usize,
    /// Oracle evaluations, seeds included.
    pub cells_evaluated: usize,
    /// False if an iteration budget stopped the search while cells that
    /// could still improve the answer remained.
    pub converged: bool,
}

/// The best point found and its signed distance to the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pole<F> {
    /// Location of the pole.
    pub point: Point2<F>,
    /// Signed boundary distance at `point`.
    pub distance: F,
    /// Search counters.
    pub stats: SearchStats,
}

/// Finds the pole of inaccessibility of `polygon` to within `precision`.
///
/// This is the point inside the polygon furthest from its boundary, holes
/// included. The distance at the returned point is within `precision` of the
/// true maximum.
///
/// # Errors
///
/// Returns an error if `precision` is not positive and finite, or if the
/// polygon fails [`validate_polygon`].
///
/// # Example
///
/// ```
/// use inaccessum::{polylabel, Point2};
/// use inaccessum::polygon::Polygon;
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
///
/// let center = polylabel(&square, 0.01).unwrap();
/// assert!((center.x - 2.0).abs() <= 0.01);
/// assert!((center.y - 2.0).abs() <= 0.01);
/// ```
pub fn polylabel<F: Float>(polygon: &Polygon<F>, precision: F) -> Result<Point2<F>, PoleError> {
    pole_of_inaccessibility(polygon, &PolylabelOptions::with_precision(precision))
        .map(|pole| pole.point)
}

/// Like [`polylabel`], but takes full options and reports the distance and
/// search counters along with the point.
pub fn pole_of_inaccessibility<F: Float>(
    polygon: &Polygon<F>,
    options: &PolylabelOptions<F>,
) -> Result<Pole<F>, PoleError> {
    options.validate()?;
    validate_polygon(polygon)?;
    let bbox = polygon.bounding_box().ok_or(PoleError::EmptyPolygon)?;
    search(polygon, bbox, polygon.centroid(), options)
}

/// Runs the search over any boundary distance oracle.
///
/// `bbox` must enclose the region of interest and `centroid` is an optional
/// extra seed; the bounding-box center is always tried. The oracle is trusted
/// to return finite values inside `bbox`.
///
/// A box with zero width or zero height cannot be tiled, so its center is
/// returned without searching.
pub fn search<F, O>(
    oracle: &O,
    bbox: Aabb2<F>,
    centroid: Option<Point2<F>>,
    options: &PolylabelOptions<F>,
) -> Result<Pole<F>, PoleError>
where
    F: Float,
    O: BoundaryDistance<F> + ?Sized,
{
    options.validate()?;

    let precision = options.precision;
    let cell_size = bbox.min_extent();
    let bbox_cell = Cell::point(bbox.center(), oracle);

    if bbox.is_degenerate() {
        debug!(
            width = as_f64(bbox.width()),
            height = as_f64(bbox.height()),
            "degenerate bounding box, returning its center"
        );
        return Ok(Pole {
            point: bbox_cell.center(),
            distance: bbox_cell.distance(),
            stats: SearchStats {
                iterations: 0,
                cells_evaluated: 1,
                converged: true,
            },
        });
    }

    let mut frontier = seed_frontier(oracle, bbox, cell_size);
    let seeds = frontier.len();

    let mut best = bbox_cell;
    if let Some(c) = centroid {
        let centroid_cell = Cell::point(c, oracle);
        if centroid_cell.distance() >= best.distance() {
            best = centroid_cell;
        }
    }
    let mut cells_evaluated = seeds + 1 + usize::from(centroid.is_some());

    debug!(
        cell_size = as_f64(cell_size),
        seeds,
        precision = as_f64(precision),
        "starting pole search"
    );

    let mut iterations = 0usize;
    let mut converged = true;

    while let Some(cell) = frontier.pop() {
        iterations += 1;

        if cell.distance() > best.distance() {
            best = cell;
            trace!(
                x = as_f64(cell.center().x),
                y = as_f64(cell.center().y),
                distance = as_f64(cell.distance()),
                iterations,
                "new best cell"
            );
        }

        if options.max_iterations.is_some_and(|limit| iterations >= limit) {
            // Only the top of the heap matters: every other bound is lower.
            let open = |bound: F| bound - best.distance() > precision;
            converged = !(open(cell.bound()) || frontier.peek_bound().is_some_and(open));
            if !converged {
                warn!(
                    iterations,
                    remaining = frontier.len() + 1,
                    "iteration budget exhausted before convergence"
                );
            }
            break;
        }

        if cell.bound() - best.distance() <= precision {
            continue;
        }

        frontier.extend(cell.subdivide(oracle));
        cells_evaluated += 4;
    }

    debug!(
        iterations,
        cells_evaluated,
        distance = as_f64(best.distance()),
        converged,
        "pole search finished"
    );

    Ok(Pole {
        point: best.center(),
        distance: best.distance(),
        stats: SearchStats {
            iterations,
            cells_evaluated,
            converged,
        },
    })
}

/// Tiles the bounding box with square cells of side `cell_size`.
///
/// Tiles start at the minimum corner and continue while their own minimum
/// corner is still inside the box, so the last row and column may hang over
/// the far edges.
fn seed_frontier<F, O>(oracle: &O, bbox: Aabb2<F>, cell_size: F) -> Frontier<F>
where
    F: Float,
    O: BoundaryDistance<F> + ?Sized,
{
    let h = cell_size / (F::one() + F::one());
    let mut frontier = Frontier::new();

    let mut i = F::zero();
    while bbox.min.x + i * cell_size < bbox.max.x {
        let x = bbox.min.x + i * cell_size + h;
        let mut j = F::zero();
        while bbox.min.y + j * cell_size < bbox.max.y {
            let y = bbox.min.y + j * cell_size + h;
            frontier.push(Cell::new(Point2::new(x, y), h, oracle));
            j = j + F::one();
        }
        i = i + F::one();
    }

    frontier
}

/// Widens a coordinate for log fields.
#[inline]
fn as_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
