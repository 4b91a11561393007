//! Error types for pole-of-inaccessibility searches.

use thiserror::Error;

/// Why a ring was rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingDefect {
    /// Fewer than three distinct vertices once the closing vertex is dropped.
    TooFewVertices {
        /// Number of distinct vertices found.
        distinct: usize,
    },
    /// A vertex has a NaN or infinite coordinate.
    NonFiniteCoordinate {
        /// Index of the offending vertex within the ring.
        vertex: usize,
    },
}

impl std::fmt::Display for RingDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RingDefect::TooFewVertices { distinct } => {
                write!(f, "only {distinct} distinct vertices, at least 3 required")
            }
            RingDefect::NonFiniteCoordinate { vertex } => {
                write!(f, "vertex {vertex} has a non-finite coordinate")
            }
        }
    }
}

/// Errors reported before a search starts.
///
/// The search itself is deterministic and cannot fail once its input has been
/// accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoleError {
    /// The polygon has no rings at all.
    #[error("polygon has no rings")]
    EmptyPolygon,

    /// A ring failed validation. Ring 0 is the exterior, holes follow.
    #[error("invalid polygon: ring {ring}: {defect}")]
    InvalidPolygon {
        /// Index of the offending ring.
        ring: usize,
        /// What is wrong with it.
        defect: RingDefect,
    },

    /// Precision must be a positive finite number.
    #[error("precision must be positive and finite, got {precision}")]
    InvalidPrecision {
        /// The rejected value, widened to `f64` for reporting.
        precision: f64,
    },

    /// No precision was given and none could be derived, because the batch
    /// holds no valid polygon with positive area.
    #[error("no precision given and no polygon with positive area to derive one from")]
    NoDefaultPrecision,

    /// An iteration budget of zero would never evaluate a single cell.
    #[error("iteration budget must be at least 1")]
    InvalidIterationBudget,
}
