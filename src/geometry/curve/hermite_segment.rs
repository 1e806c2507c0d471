use crate::error::{ConfigurationError, Result};
use crate::math::curvature::{
    curvature, hermite_first_derivative_polygon, hermite_second_derivative_polygon,
};
use crate::math::{de_casteljau, linspace, Vector2};

use super::CurveDomain;

/// One cubic Hermite piece between two knots.
///
/// The piece interpolates `p0` and `p1` with end derivatives `m0` and `m1`
/// and is stored as its equivalent Bézier polygon
/// `[p0, p0 + m0 / 3, p1 - m1 / 3, p1]`, evaluated with de Casteljau.
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteSegment {
    p0: Vector2,
    p1: Vector2,
    m0: Vector2,
    m1: Vector2,
    bezier: [Vector2; 4],
    domain: CurveDomain,
}

impl HermiteSegment {
    /// Creates a segment on the default domain `[0, 1]`.
    #[must_use]
    pub fn new(p0: Vector2, p1: Vector2, m0: Vector2, m1: Vector2) -> Self {
        Self {
            p0,
            p1,
            m0,
            m1,
            bezier: [p0, p0 + m0 / 3.0, p1 - m1 / 3.0, p1],
            domain: CurveDomain::new(0.0, 1.0),
        }
    }

    /// Creates a segment sampled over the parameter window `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `a >= b` or either bound is not finite.
    pub fn with_domain(
        p0: Vector2,
        p1: Vector2,
        m0: Vector2,
        m1: Vector2,
        a: f64,
        b: f64,
    ) -> Result<Self> {
        if !(a.is_finite() && b.is_finite()) || a >= b {
            return Err(ConfigurationError::InvalidDomain { a, b }.into());
        }
        Ok(Self {
            domain: CurveDomain::new(a, b),
            ..Self::new(p0, p1, m0, m1)
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn p0(&self) -> &Vector2 {
        &self.p0
    }

    /// Returns the end point.
    #[must_use]
    pub fn p1(&self) -> &Vector2 {
        &self.p1
    }

    /// Returns the start tangent.
    #[must_use]
    pub fn m0(&self) -> &Vector2 {
        &self.m0
    }

    /// Returns the end tangent.
    #[must_use]
    pub fn m1(&self) -> &Vector2 {
        &self.m1
    }

    /// Returns the Bézier control polygon.
    #[must_use]
    pub fn bezier_points(&self) -> &[Vector2; 4] {
        &self.bezier
    }

    /// Returns the parameter window used by [`Self::points`].
    #[must_use]
    pub fn domain(&self) -> CurveDomain {
        self.domain
    }

    /// Evaluates the Bézier form at `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Vector2 {
        de_casteljau::evaluate(&self.bezier, t)
    }

    /// Samples `resolution` points at parameters evenly spaced over the domain.
    #[must_use]
    pub fn points(&self, resolution: usize) -> Vec<Vector2> {
        linspace(self.domain.t_min, self.domain.t_max, resolution)
            .map(|t| self.evaluate(t))
            .collect()
    }

    /// First derivative at local parameter `t`.
    #[must_use]
    pub fn first_derivative(&self, t: f64) -> Vector2 {
        let polygon = hermite_first_derivative_polygon(&self.p0, &self.p1, &self.m0, &self.m1);
        de_casteljau::evaluate(&polygon, t)
    }

    /// Second derivative at local parameter `t`.
    #[must_use]
    pub fn second_derivative(&self, t: f64) -> Vector2 {
        let polygon = hermite_second_derivative_polygon(&self.p0, &self.p1, &self.m0, &self.m1);
        de_casteljau::evaluate(&polygon, t)
    }

    /// Curvature at local parameter `t`; zero where the tangent vanishes.
    #[must_use]
    pub fn curvature(&self, t: f64) -> f64 {
        curvature(&self.first_derivative(t), &self.second_derivative(t))
    }
}
