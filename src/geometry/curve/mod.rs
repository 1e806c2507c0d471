mod any_curve;
mod c2_spline;
mod hermite_segment;
mod hermite_spline;
mod lagrange;
mod spliced;
pub mod tangents;

pub use any_curve::{AnyCurve, CurveOptions};
pub use c2_spline::C2Spline;
pub use hermite_segment::HermiteSegment;
pub use hermite_spline::{HermiteOptions, HermiteSpline};
pub use lagrange::LagrangePolynomial;
pub use tangents::TangentMode;

use std::collections::BTreeMap;

use crate::error::{ConfigurationError, Result};
use crate::math::Vector2;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Curvature samples of a curve, as two parallel sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvatureTrace {
    /// Absolute curve parameter of each sample.
    pub params: Vec<f64>,
    /// Curvature at the matching parameter.
    pub values: Vec<f64>,
}

impl CurvatureTrace {
    /// Creates an empty trace with room for `capacity` samples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            params: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends one sample.
    pub fn push(&mut self, param: f64, value: f64) {
        self.params.push(param);
        self.values.push(value);
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns whether the trace holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Range or choice set a hyperparameter may take, for building controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HyperparameterDescriptor {
    /// Numeric value in `[min, max]`, offered in `steps` increments.
    Range { min: f64, max: f64, steps: usize },
    /// One of a fixed set of names.
    Choice(&'static [&'static str]),
}

/// Current value of a hyperparameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HyperparameterValue {
    Number(f64),
    Choice(&'static str),
}

/// Hyperparameter name to descriptor.
pub type Hyperparameters = BTreeMap<&'static str, HyperparameterDescriptor>;

/// Hyperparameter name to current value.
pub type HyperparameterValues = BTreeMap<&'static str, HyperparameterValue>;

/// Capabilities shared by every curve family.
///
/// Curves are immutable values: edits return a fully rebuilt curve and leave
/// `self` untouched, so a failed edit never invalidates the current curve.
pub trait ParametricCurve: Sized {
    /// Display name of the curve family.
    fn curve_type(&self) -> &'static str;

    /// Returns the interpolation points.
    fn control_points(&self) -> &[Vector2];

    /// Returns the knot sequence, one parameter per control point.
    fn knots(&self) -> &[f64];

    /// Samples the curve as a polyline.
    fn sample(&self, resolution: usize) -> Vec<Vector2>;

    /// Samples the curvature at `resolution` parameters per knot interval.
    fn curvature_trace(&self, resolution: usize) -> CurvatureTrace;

    /// Returns a rebuilt curve with control point `index` replaced by `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the rebuild fails.
    fn set_control_point(&self, index: usize, value: Vector2) -> Result<Self>;

    /// Describes the tunable hyperparameters of the curve.
    fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters::new()
    }

    /// Returns the current hyperparameter values.
    fn hyperparameter_values(&self) -> HyperparameterValues {
        HyperparameterValues::new()
    }

    /// Returns a rebuilt curve with hyperparameter `name` set to `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve has no such hyperparameter, the value
    /// does not fit it, or the rebuild fails.
    fn set_hyperparameter(&self, name: &str, value: HyperparameterValue) -> Result<Self> {
        let _ = value;
        Err(ConfigurationError::UnknownHyperparameter(name.to_owned()).into())
    }
}

/// Upper bound on the samples reserved up front for one output buffer.
pub(crate) const MAX_RESERVED_SAMPLES: usize = 1 << 20;

/// Capacity to reserve for `groups * per_group` samples, saturated and capped
/// so oversized resolutions grow the buffer instead of failing to reserve it.
pub(crate) fn capacity_hint(groups: usize, per_group: usize) -> usize {
    groups.saturating_mul(per_group).min(MAX_RESERVED_SAMPLES)
}

/// Copies `points` with `points[index]` replaced by `value`.
pub(crate) fn replace_point(
    points: &[Vector2],
    index: usize,
    value: Vector2,
) -> Result<Vec<Vector2>> {
    if index >= points.len() {
        return Err(ConfigurationError::IndexOutOfRange {
            index,
            len: points.len(),
        }
        .into());
    }
    let mut points = points.to_vec();
    points[index] = value;
    Ok(points)
}
