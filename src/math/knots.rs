use crate::error::{ConfigurationError, Result};

/// Checks that `knots` pairs 1:1 with `points_len` points, is finite and
/// strictly increasing, and that `family` gets at least `min_points` points.
///
/// # Errors
///
/// Returns the first [`ConfigurationError`] found.
pub fn validate(
    points_len: usize,
    knots: &[f64],
    family: &'static str,
    min_points: usize,
) -> Result<()> {
    if points_len != knots.len() {
        return Err(ConfigurationError::LengthMismatch {
            points: points_len,
            knots: knots.len(),
        }
        .into());
    }
    if points_len < min_points {
        return Err(ConfigurationError::TooFewPoints {
            family,
            required: min_points,
            actual: points_len,
        }
        .into());
    }
    if let Some(index) = knots.iter().position(|k| !k.is_finite()) {
        return Err(ConfigurationError::NonFiniteKnot { index }.into());
    }
    if let Some(i) = knots.windows(2).position(|w| w[0] >= w[1]) {
        return Err(ConfigurationError::KnotsNotIncreasing {
            index: i + 1,
            previous: knots[i],
            next: knots[i + 1],
        }
        .into());
    }
    Ok(())
}

/// The index knots `0, 1, ..., n - 1`, one unit per interval.
///
/// Hermite segments run on a local `[0, 1]` parameter, so unit spacing keeps
/// the estimated tangents at the scale of the point differences.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn indices(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// `n` knots evenly spaced over `[start, end]`.
#[must_use]
pub fn uniform(n: usize, start: f64, end: f64) -> Vec<f64> {
    super::linspace(start, end, n).collect()
}
