use tracing::debug;

use crate::error::Result;
use crate::math::curvature::lagrange_curvature;
use crate::math::{aitken_neville, knots, linspace, Vector2};

use super::{capacity_hint, replace_point, CurvatureTrace, ParametricCurve};

/// The polynomial of degree `n - 1` through `n` points, evaluated globally.
///
/// High point counts oscillate (Runge) and the analytic derivatives behind
/// [`ParametricCurve::curvature_trace`] cost `O(n⁴)` per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePolynomial {
    points: Vec<Vector2>,
    knots: Vec<f64>,
}

impl LagrangePolynomial {
    /// Family name used in diagnostics.
    pub const NAME: &'static str = "Lagrange Interpolation Curve";

    /// Builds the polynomial with `P(knots[i]) = points[i]`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given, the lengths
    /// differ, or the knots are not strictly increasing.
    pub fn new(points: Vec<Vector2>, knots: Vec<f64>) -> Result<Self> {
        knots::validate(points.len(), &knots, Self::NAME, 2)?;
        debug!(points = points.len(), "built lagrange polynomial");
        Ok(Self { points, knots })
    }

    /// Evaluates the polynomial at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Vector2 {
        aitken_neville::evaluate(&self.points, &self.knots, t)
    }

    /// First derivative at parameter `t`.
    #[must_use]
    pub fn first_derivative(&self, t: f64) -> Vector2 {
        aitken_neville::first_derivative(&self.points, &self.knots, t)
    }

    /// Second derivative at parameter `t`.
    #[must_use]
    pub fn second_derivative(&self, t: f64) -> Vector2 {
        aitken_neville::second_derivative(&self.points, &self.knots, t)
    }

    /// Curvature at parameter `t`.
    #[must_use]
    pub fn curvature(&self, t: f64) -> f64 {
        lagrange_curvature(&self.points, &self.knots, t)
    }

    fn first_knot(&self) -> f64 {
        self.knots.first().copied().unwrap_or_default()
    }

    fn last_knot(&self) -> f64 {
        self.knots.last().copied().unwrap_or_default()
    }
}

impl ParametricCurve for LagrangePolynomial {
    fn curve_type(&self) -> &'static str {
        Self::NAME
    }

    fn control_points(&self) -> &[Vector2] {
        &self.points
    }

    fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// `resolution + 1` points spanning the first to the last knot.
    fn sample(&self, resolution: usize) -> Vec<Vector2> {
        linspace(self.first_knot(), self.last_knot(), resolution.saturating_add(1))
            .map(|t| self.evaluate(t))
            .collect()
    }

    fn curvature_trace(&self, resolution: usize) -> CurvatureTrace {
        let intervals = self.knots.len().saturating_sub(1);
        let mut trace = CurvatureTrace::with_capacity(capacity_hint(intervals, resolution));
        for span in self.knots.windows(2) {
            for t in linspace(span[0], span[1], resolution) {
                trace.push(t, self.curvature(t));
            }
        }
        trace
    }

    fn set_control_point(&self, index: usize, value: Vector2) -> Result<Self> {
        let points = replace_point(&self.points, index, value)?;
        Self::new(points, self.knots.clone())
    }
}
