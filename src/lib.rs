//! inaccessum - Poles of inaccessibility for polygons
//!
//! Finds the point inside a polygon (holes allowed) that lies furthest from
//! its boundary, to within a caller-chosen precision. The search is a
//! best-first branch and bound over square cells, so it only ever evaluates
//! the boundary distance at a small number of points.
//!
//! # Example
//!
//! ```
//! use inaccessum::{polylabel, Point2, Polygon};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let p = polylabel(&square, 0.01).unwrap();
//! assert!((p.x - 2.0).abs() <= 0.01 && (p.y - 2.0).abs() <= 0.01);
//! ```

pub mod bounds;
pub mod distance;
pub mod error;
pub mod polygon;
pub mod polylabel;
pub mod primitives;

#[cfg(feature = "simd")]
pub mod simd;

pub use bounds::Aabb2;
pub use distance::{signed_distance_to_boundary, BoundaryDistance};
pub use error::{PoleError, RingDefect};
pub use polygon::Polygon;
pub use polylabel::{pole_of_inaccessibility, polylabel, Pole, PolylabelOptions, SearchStats};
pub use primitives::{Point2, Segment2, Vec2};
