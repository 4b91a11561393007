//! Polygons with holes and the ring operations the pole search relies on.
//!
//! This module provides:
//! - Area and centroid calculation (holes subtracted)
//! - Point containment testing (even-odd over all rings)
//! - Input validation
//!
//! # Example
//!
//! ```
//! use inaccessum::polygon::Polygon;
//! use inaccessum::Point2;
//!
//! let frame = Polygon::with_holes(
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(10.0, 0.0),
//!         Point2::new(10.0, 10.0),
//!         Point2::new(0.0, 10.0),
//!     ],
//!     vec![vec![
//!         Point2::new(4.0, 4.0),
//!         Point2::new(6.0, 4.0),
//!         Point2::new(6.0, 6.0),
//!         Point2::new(4.0, 6.0),
//!     ]],
//! );
//!
//! assert_eq!(frame.area(), 96.0);
//! assert!(!frame.contains(Point2::new(5.0, 5.0)));
//! ```

mod core;
mod validate;

pub(crate) use self::core::ring_edges;
pub use self::core::{ring_area, ring_centroid, ring_contains, ring_signed_area, Polygon};
pub use validate::{validate_polygon, validate_ring};
