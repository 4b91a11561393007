//! Input validation for polygons handed to the pole search.
//!
//! # Example
//!
//! ```
//! use inaccessum::polygon::{validate_polygon, Polygon};
//! use inaccessum::{Point2, PoleError};
//!
//! let segment = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 0.0),
//! ]);
//! assert!(matches!(
//!     validate_polygon(&segment),
//!     Err(PoleError::InvalidPolygon { ring: 0, .. })
//! ));
//! ```

use super::core::Polygon;
use crate::error::{PoleError, RingDefect};
use crate::primitives::Point2;
use num_traits::Float;

/// Checks that a polygon is usable by the search.
///
/// Every ring must have at least three distinct vertices and only finite
/// coordinates. Self-intersections and zero area are not rejected here; the
/// search falls back to the bounding-box center for zero-extent input.
pub fn validate_polygon<F: Float>(polygon: &Polygon<F>) -> Result<(), PoleError> {
    if polygon.is_empty() && polygon.holes().is_empty() {
        return Err(PoleError::EmptyPolygon);
    }

    for (ring, vertices) in polygon.rings().enumerate() {
        validate_ring(vertices).map_err(|defect| PoleError::InvalidPolygon { ring, defect })?;
    }

    Ok(())
}

/// Checks a single ring.
pub fn validate_ring<F: Float>(ring: &[Point2<F>]) -> Result<(), RingDefect> {
    if let Some(vertex) = ring.iter().position(|p| !p.is_finite()) {
        return Err(RingDefect::NonFiniteCoordinate { vertex });
    }

    let distinct = distinct_vertices_up_to_three(ring);
    if distinct < 3 {
        return Err(RingDefect::TooFewVertices { distinct });
    }

    Ok(())
}

/// Counts distinct vertices, stopping as soon as three have been found.
fn distinct_vertices_up_to_three<F: Float>(ring: &[Point2<F>]) -> usize {
    let Some(&first) = ring.first() else {
        return 0;
    };
    let Some(&second) = ring.iter().find(|&&p| p != first) else {
        return 1;
    };
    if ring.iter().any(|&p| p != first && p != second) {
        3
    } else {
        2
    }
}
