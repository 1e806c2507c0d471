use tracing::debug;

use crate::error::{ConfigurationError, CurvelabError, Result};
use crate::math::{knots, Vector2};

use super::spliced::SplicedHermite;
use super::tangents::{estimate_tangents, TangentMode};
use super::{
    replace_point, CurvatureTrace, HermiteSegment, HyperparameterDescriptor, HyperparameterValue,
    HyperparameterValues, Hyperparameters, ParametricCurve,
};

/// Options of a [`HermiteSpline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteOptions {
    /// Tangent scale in `[0, 1]`: `0` is Catmull-Rom, `1` flattens every
    /// interior tangent.
    pub tension: f64,
    /// End tangent strategy.
    pub tangent_mode: TangentMode,
}

impl Default for HermiteOptions {
    fn default() -> Self {
        Self {
            tension: 0.2,
            tangent_mode: TangentMode::Approximated,
        }
    }
}

/// Piecewise cubic Hermite spline with tension-controlled tangents.
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteSpline {
    inner: SplicedHermite,
    options: HermiteOptions,
}

impl HermiteSpline {
    /// Family name used in diagnostics.
    pub const NAME: &'static str = "Cubic Hermite Spline";

    /// Builds the spline through `points` at parameters `knots`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given, the lengths
    /// differ, the knots are not strictly increasing, or the tension lies
    /// outside `[0, 1]`.
    pub fn new(points: Vec<Vector2>, knots: Vec<f64>, options: HermiteOptions) -> Result<Self> {
        knots::validate(points.len(), &knots, Self::NAME, 2)?;
        if !(0.0..=1.0).contains(&options.tension) {
            return Err(ConfigurationError::TensionOutOfRange(options.tension).into());
        }

        let tangents = estimate_tangents(&points, &knots, options.tension, options.tangent_mode);
        debug!(
            points = points.len(),
            tension = options.tension,
            tangent = %options.tangent_mode,
            "built hermite spline"
        );
        Ok(Self {
            inner: SplicedHermite::new(points, knots, tangents),
            options,
        })
    }

    /// Returns the options the spline was built with.
    #[must_use]
    pub fn options(&self) -> HermiteOptions {
        self.options
    }

    /// Returns the estimated tangent at each knot.
    #[must_use]
    pub fn tangents(&self) -> &[Vector2] {
        &self.inner.tangents
    }

    /// Returns the Hermite pieces, one per knot interval.
    #[must_use]
    pub fn segments(&self) -> &[HermiteSegment] {
        &self.inner.segments
    }

    /// Rebuilds the spline from the same points with new options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_options(&self, options: HermiteOptions) -> Result<Self> {
        Self::new(self.inner.points.clone(), self.inner.knots.clone(), options)
    }
}

impl ParametricCurve for HermiteSpline {
    fn curve_type(&self) -> &'static str {
        Self::NAME
    }

    fn control_points(&self) -> &[Vector2] {
        &self.inner.points
    }

    fn knots(&self) -> &[f64] {
        &self.inner.knots
    }

    fn sample(&self, resolution: usize) -> Vec<Vector2> {
        self.inner.sample(resolution)
    }

    fn curvature_trace(&self, resolution: usize) -> CurvatureTrace {
        self.inner.curvature_trace(resolution)
    }

    fn set_control_point(&self, index: usize, value: Vector2) -> Result<Self> {
        let points = replace_point(&self.inner.points, index, value)?;
        Self::new(points, self.inner.knots.clone(), self.options)
    }

    fn hyperparameters(&self) -> Hyperparameters {
        Hyperparameters::from([
            (
                "tension",
                HyperparameterDescriptor::Range {
                    min: 0.0,
                    max: 1.0,
                    steps: 20,
                },
            ),
            ("tangent", HyperparameterDescriptor::Choice(TangentMode::NAMES)),
        ])
    }

    fn hyperparameter_values(&self) -> HyperparameterValues {
        HyperparameterValues::from([
            ("tension", HyperparameterValue::Number(self.options.tension)),
            (
                "tangent",
                HyperparameterValue::Choice(self.options.tangent_mode.name()),
            ),
        ])
    }

    fn set_hyperparameter(&self, name: &str, value: HyperparameterValue) -> Result<Self> {
        let mut options = self.options;
        match (name, value) {
            ("tension", HyperparameterValue::Number(tension)) => options.tension = tension,
            ("tangent", HyperparameterValue::Choice(mode)) => options.tangent_mode = mode.parse()?,
            ("tension", other) => return Err(invalid_value("tension", other)),
            ("tangent", other) => return Err(invalid_value("tangent", other)),
            _ => return Err(ConfigurationError::UnknownHyperparameter(name.to_owned()).into()),
        }
        self.with_options(options)
    }
}

fn invalid_value(name: &'static str, value: HyperparameterValue) -> CurvelabError {
    ConfigurationError::InvalidHyperparameterValue {
        name,
        value: format!("{value:?}"),
    }
    .into()
}
