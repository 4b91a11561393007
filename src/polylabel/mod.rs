//! Pole of inaccessibility (visual center) search.
//!
//! The pole of inaccessibility is the point inside a polygon that is furthest
//! from its boundary. It is the usual anchor for a polygon's label: unlike the
//! centroid it never falls outside a concave shape or into a hole.
//!
//! # Example
//!
//! ```
//! use inaccessum::polylabel::{pole_of_inaccessibility, PolylabelOptions};
//! use inaccessum::polygon::Polygon;
//! use inaccessum::Point2;
//!
//! // An L shape: its centroid (2.2, 2.2) lies outside the polygon.
//! let l_shape = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(6.0, 0.0),
//!     Point2::new(6.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 6.0),
//!     Point2::new(0.0, 6.0),
//! ]);
//!
//! let pole = pole_of_inaccessibility(&l_shape, &PolylabelOptions::with_precision(0.1)).unwrap();
//! assert!(l_shape.contains(pole.point));
//! assert!(pole.distance > 1.0);
//! ```

mod batch;
mod cell;
mod frontier;
mod options;
mod search;

#[cfg(feature = "parallel")]
pub use batch::par_label_features;
pub use batch::{default_precision, label_features, Labeled};
pub use cell::Cell;
pub use frontier::Frontier;
pub use options::PolylabelOptions;
pub use search::{pole_of_inaccessibility, polylabel, search, Pole, SearchStats};
