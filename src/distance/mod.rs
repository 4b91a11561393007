//! Boundary distance oracle.

mod boundary;

pub use boundary::{signed_distance_to_boundary, BoundaryDistance};
