use tracing::{debug, warn};

use crate::error::Result;
use crate::math::c2_system::solve_c2_derivatives;
use crate::math::{knots, Vector2};

use super::spliced::SplicedHermite;
use super::{replace_point, CurvatureTrace, HermiteSegment, ParametricCurve};

/// Piecewise cubic Hermite spline whose knot derivatives are solved so the
/// whole curve is twice continuously differentiable.
#[derive(Debug, Clone, PartialEq)]
pub struct C2Spline {
    inner: SplicedHermite,
}

impl C2Spline {
    /// Family name used in diagnostics.
    pub const NAME: &'static str = "C2 Spline";

    /// Builds the spline through `points` at parameters `knots`.
    ///
    /// Two points are accepted; the system then reduces to the 2×2 boundary
    /// case and the result is a single cubic.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given, the lengths
    /// differ, the knots are not strictly increasing, or the derivative
    /// system cannot be solved.
    pub fn new(points: Vec<Vector2>, knots: Vec<f64>) -> Result<Self> {
        knots::validate(points.len(), &knots, Self::NAME, 2)?;
        if points.len() == 2 {
            warn!("C2 spline built from two points, continuity constraints are vacuous");
        }

        let tangents = solve_c2_derivatives(&points)?;
        debug!(points = points.len(), "built C2 spline");
        Ok(Self {
            inner: SplicedHermite::new(points, knots, tangents),
        })
    }

    /// Returns the solved derivative at each knot.
    #[must_use]
    pub fn tangents(&self) -> &[Vector2] {
        &self.inner.tangents
    }

    /// Returns the Hermite pieces, one per knot interval.
    #[must_use]
    pub fn segments(&self) -> &[HermiteSegment] {
        &self.inner.segments
    }
}

impl ParametricCurve for C2Spline {
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
        Self::new(points, self.inner.knots.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, CurvelabError};
    use approx::assert_relative_eq;

    fn wave() -> C2Spline {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 2.0),
            Vector2::new(2.5, -1.0),
            Vector2::new(4.0, 1.5),
            Vector2::new(5.0, 0.0),
            Vector2::new(7.0, 3.0),
        ];
        let knots = knots::uniform(points.len(), 0.0, 1.0);
        C2Spline::new(points, knots).unwrap()
    }

    #[test]
    fn second_derivative_is_continuous() {
        let spline = wave();
        for pair in spline.segments().windows(2) {
            let left = pair[0].second_derivative(1.0);
            let right = pair[1].second_derivative(0.0);
            assert_relative_eq!(left, right, epsilon = 1e-6);
        }
    }

    #[test]
    fn first_derivative_is_continuous() {
        let spline = wave();
        for pair in spline.segments().windows(2) {
            assert_relative_eq!(
                pair[0].first_derivative(1.0),
                pair[1].first_derivative(0.0),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn interpolates_points() {
        let spline = wave();
        let pts = spline.control_points().to_vec();
        for (k, seg) in spline.segments().iter().enumerate() {
            assert_relative_eq!(seg.evaluate(0.0), pts[k], epsilon = 1e-9);
            assert_relative_eq!(seg.evaluate(1.0), pts[k + 1], epsilon = 1e-9);
        }
    }

    #[test]
    fn two_point_boundary_case() {
        let spline =
            C2Spline::new(vec![Vector2::new(0.0, 0.0), Vector2::new(3.0, 3.0)], vec![0.0, 1.0])
                .unwrap();
        assert_eq!(spline.segments().len(), 1);
        assert_relative_eq!(spline.tangents()[0], Vector2::new(3.0, 3.0), epsilon = 1e-12);
        assert!(spline
            .curvature_trace(8)
            .values
            .iter()
            .all(|k| k.abs() < 1e-9));
    }

    #[test]
    fn non_increasing_knots_are_rejected() {
        let err = C2Spline::new(
            vec![Vector2::zeros(), Vector2::new(1.0, 0.0), Vector2::new(2.0, 0.0)],
            vec![0.0, 2.0, 1.0],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CurvelabError::Configuration(ConfigurationError::KnotsNotIncreasing { index: 2, .. })
        ));
    }

    #[test]
    fn mutation_resolves_globally() {
        let spline = wave();
        let moved = spline.set_control_point(0, Vector2::new(0.0, 3.0)).unwrap();
        // The C2 system couples every knot: even the far end moves.
        let last = spline.tangents().len() - 1;
        assert!((moved.tangents()[last] - spline.tangents()[last]).norm() > 1e-9);
        for pair in moved.segments().windows(2) {
            assert_relative_eq!(
                pair[0].second_derivative(1.0),
                pair[1].second_derivative(0.0),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn no_hyperparameters() {
        let spline = wave();
        assert!(spline.hyperparameters().is_empty());
        assert!(spline.hyperparameter_values().is_empty());
    }
}
