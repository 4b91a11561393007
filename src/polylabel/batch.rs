//! Labelling whole collections of keyed polygons.
//!
//! Each feature is searched independently with [`pole_of_inaccessibility`]
//! and the outcome is paired with the feature's key. A bad polygon only
//! fails its own entry.

use super::options::PolylabelOptions;
use super::search::{pole_of_inaccessibility, Pole};
use crate::error::PoleError;
use crate::polygon::{validate_polygon, Polygon};
use num_traits::Float;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The outcome of labelling one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeled<K, F> {
    /// Key of the feature this label belongs to.
    pub key: K,
    /// The pole, or why this feature could not be labelled.
    pub result: Result<Pole<F>, PoleError>,
}

/// Precision heuristic for a collection: half the side of a square with the
/// area of the smallest valid polygon.
///
/// Returns `None` when there is no valid polygon with positive area.
///
/// # Example
///
/// ```
/// use inaccessum::polylabel::default_precision;
/// use inaccessum::polygon::Polygon;
/// use inaccessum::Point2;
///
/// let small = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// assert_eq!(default_precision([&small]), Some(1.0));
/// ```
pub fn default_precision<'a, F, I>(polygons: I) -> Option<F>
where
    F: Float + 'a,
    I: IntoIterator<Item = &'a Polygon<F>>,
{
    let min_area = polygons
        .into_iter()
        .filter(|p| validate_polygon(*p).is_ok())
        .map(Polygon::area)
        .fold(F::infinity(), F::min);

    if min_area.is_finite() && min_area > F::zero() {
        Some(min_area.sqrt() / (F::one() + F::one()))
    } else {
        None
    }
}

/// Resolves the precision for a batch and checks it once up front.
fn batch_options<K, F: Float>(
    features: &[(K, Polygon<F>)],
    precision: Option<F>,
) -> Result<PolylabelOptions<F>, PoleError> {
    let precision = match precision {
        Some(p) => p,
        None => default_precision(features.iter().map(|(_, poly)| poly))
            .ok_or(PoleError::NoDefaultPrecision)?,
    };
    let options = PolylabelOptions::with_precision(precision);
    options.validate()?;

    debug!(
        features = features.len(),
        precision = precision.to_f64().unwrap_or(f64::NAN),
        "labelling features"
    );
    Ok(options)
}

/// Labels every feature in order.
///
/// When `precision` is `None` it is derived with [`default_precision`].
///
/// # Errors
///
/// Fails as a whole only when the precision is invalid ([`PoleError::InvalidPrecision`])
/// or cannot be derived ([`PoleError::NoDefaultPrecision`]);
/// per-feature failures are reported in each [`Labeled::result`].
pub fn label_features<K, F>(
    features: &[(K, Polygon<F>)],
    precision: Option<F>,
) -> Result<Vec<Labeled<K, F>>, PoleError>
where
    K: Clone,
    F: Float,
{
    if features.is_empty() {
        return Ok(Vec::new());
    }
    let options = batch_options(features, precision)?;

    Ok(features
        .iter()
        .map(|(key, polygon)| Labeled {
            key: key.clone(),
            result: pole_of_inaccessibility(polygon, &options),
        })
        .collect())
}

/// Parallel [`label_features`]. Output order matches input order.
#[cfg(feature = "parallel")]
pub fn par_label_features<K, F>(
    features: &[(K, Polygon<F>)],
    precision: Option<F>,
) -> Result<Vec<Labeled<K, F>>, PoleError>
where
    K: Clone + Send + Sync,
    F: Float + Send + Sync,
{
    if features.is_empty() {
        return Ok(Vec::new());
    }
    let options = batch_options(features, precision)?;

    Ok(features
        .par_iter()
        .map(|(key, polygon)| Labeled {
            key: key.clone(),
            result: pole_of_inaccessibility(polygon, &options),
        })
        .collect())
}
