use super::{aitken_neville, de_casteljau, Vector2};

/// Curvature from first and second derivatives:
/// `κ = |x' × x''| / |x'|³`.
///
/// A vanishing first derivative yields `0` rather than an error.
#[must_use]
pub fn curvature(d1: &Vector2, d2: &Vector2) -> f64 {
    let speed = d1.norm();
    if speed <= 0.0 {
        return 0.0;
    }
    d1.perp(d2).abs() / (speed * speed * speed)
}

/// Control polygon of the first derivative of the cubic Hermite piece
/// `(p0, p1, m0, m1)` on `[0, 1]`.
#[must_use]
pub fn hermite_first_derivative_polygon(
    p0: &Vector2,
    p1: &Vector2,
    m0: &Vector2,
    m1: &Vector2,
) -> [Vector2; 3] {
    [*m0, p1 * 3.0 - m1 - p0 * 3.0 - m0, *m1]
}

/// Control polygon of the second derivative of the cubic Hermite piece.
#[must_use]
pub fn hermite_second_derivative_polygon(
    p0: &Vector2,
    p1: &Vector2,
    m0: &Vector2,
    m1: &Vector2,
) -> [Vector2; 2] {
    [
        p1 * 6.0 - m1 * 2.0 - p0 * 6.0 - m0 * 4.0,
        m1 * 4.0 - p1 * 6.0 + p0 * 6.0 + m0 * 2.0,
    ]
}

/// Curvature of the Hermite piece `(p0, p1, m0, m1)` at local parameter `t`.
#[must_use]
pub fn hermite_curvature(p0: &Vector2, p1: &Vector2, m0: &Vector2, m1: &Vector2, t: f64) -> f64 {
    let d1 = de_casteljau::evaluate(&hermite_first_derivative_polygon(p0, p1, m0, m1), t);
    let d2 = de_casteljau::evaluate(&hermite_second_derivative_polygon(p0, p1, m0, m1), t);
    curvature(&d1, &d2)
}

/// Curvature of the Lagrange polynomial through `points` at parameter `t`.
#[must_use]
pub fn lagrange_curvature(points: &[Vector2], params: &[f64], t: f64) -> f64 {
    let d1 = aitken_neville::first_derivative(points, params, t);
    let d2 = aitken_neville::second_derivative(points, params, t);
    curvature(&d1, &d2)
}
