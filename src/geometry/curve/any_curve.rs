use crate::error::Result;
use crate::math::Vector2;

use super::{
    C2Spline, CurvatureTrace, HermiteOptions, HermiteSpline, HyperparameterValue,
    HyperparameterValues, Hyperparameters, LagrangePolynomial, ParametricCurve,
};

/// Curve family and its options, as chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveOptions {
    Hermite(HermiteOptions),
    C2,
    Lagrange,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self::Hermite(HermiteOptions::default())
    }
}

/// A curve of any supported family.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCurve {
    Hermite(HermiteSpline),
    C2(C2Spline),
    Lagrange(LagrangePolynomial),
}

impl AnyCurve {
    /// Builds the curve family selected by `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points, knots or options are invalid for the
    /// selected family.
    pub fn construct(points: Vec<Vector2>, knots: Vec<f64>, options: CurveOptions) -> Result<Self> {
        Ok(match options {
            CurveOptions::Hermite(opts) => Self::Hermite(HermiteSpline::new(points, knots, opts)?),
            CurveOptions::C2 => Self::C2(C2Spline::new(points, knots)?),
            CurveOptions::Lagrange => Self::Lagrange(LagrangePolynomial::new(points, knots)?),
        })
    }

    /// Returns the options that rebuild this curve.
    #[must_use]
    pub fn options(&self) -> CurveOptions {
        match self {
            Self::Hermite(c) => CurveOptions::Hermite(c.options()),
            Self::C2(_) => CurveOptions::C2,
            Self::Lagrange(_) => CurveOptions::Lagrange,
        }
    }
}

impl From<HermiteSpline> for AnyCurve {
    fn from(curve: HermiteSpline) -> Self {
        Self::Hermite(curve)
    }
}

impl From<C2Spline> for AnyCurve {
    fn from(curve: C2Spline) -> Self {
        Self::C2(curve)
    }
}

impl From<LagrangePolynomial> for AnyCurve {
    fn from(curve: LagrangePolynomial) -> Self {
        Self::Lagrange(curve)
    }
}

macro_rules! dispatch {
    ($self:expr, $c:ident => $body:expr) => {
        match $self {
            AnyCurve::Hermite($c) => $body,
            AnyCurve::C2($c) => $body,
            AnyCurve::Lagrange($c) => $body,
        }
    };
}

impl ParametricCurve for AnyCurve {
    fn curve_type(&self) -> &'static str {
        dispatch!(self, c => c.curve_type())
    }

    fn control_points(&self) -> &[Vector2] {
        dispatch!(self, c => c.control_points())
    }

    fn knots(&self) -> &[f64] {
        dispatch!(self, c => c.knots())
    }

    fn sample(&self, resolution: usize) -> Vec<Vector2> {
        dispatch!(self, c => c.sample(resolution))
    }

    fn curvature_trace(&self, resolution: usize) -> CurvatureTrace {
        dispatch!(self, c => c.curvature_trace(resolution))
    }

    fn set_control_point(&self, index: usize, value: Vector2) -> Result<Self> {
        dispatch!(self, c => c.set_control_point(index, value).map(Self::from))
    }

    fn hyperparameters(&self) -> Hyperparameters {
        dispatch!(self, c => c.hyperparameters())
    }

    fn hyperparameter_values(&self) -> HyperparameterValues {
        dispatch!(self, c => c.hyperparameter_values())
    }

    fn set_hyperparameter(&self, name: &str, value: HyperparameterValue) -> Result<Self> {
        dispatch!(self, c => c.set_hyperparameter(name, value).map(Self::from))
    }
}
