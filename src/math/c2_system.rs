use nalgebra::{DMatrix, DVector};
use tracing::trace;

use super::Vector2;
use crate::error::{GeometryError, Result};

/// Builds the `n×n` tridiagonal matrix of the C2 continuity system.
///
/// ```text
/// | 2 1 0 . . 0 |
/// | 1 4 1 0 . 0 |
/// | 0 1 4 1 . 0 |
/// | . . . . . . |
/// | 0 . . 0 1 2 |
/// ```
#[must_use]
pub fn system_matrix(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |r, c| {
        if r == c {
            if r == 0 || r + 1 == n {
                2.0
            } else {
                4.0
            }
        } else if r.abs_diff(c) == 1 {
            1.0
        } else {
            0.0
        }
    })
}

/// Builds the right-hand side for one coordinate:
/// `3 (P[k+1] - P[k-1])` inside, one-sided differences at both ends.
#[must_use]
pub fn right_hand_side(values: &[f64]) -> DVector<f64> {
    let n = values.len();
    DVector::from_fn(n, |k, _| {
        let hi = (k + 1).min(n - 1);
        let lo = k.saturating_sub(1);
        3.0 * (values[hi] - values[lo])
    })
}

/// Solves for the per-knot derivatives `D[k]` that make the Hermite spline
/// through `points` twice continuously differentiable.
///
/// The two coordinates decouple: one LU factorisation of [`system_matrix`]
/// is reused for the `x` and `y` right-hand sides.
///
/// # Errors
///
/// Returns [`GeometryError::SingularSystem`] if the factorisation cannot be
/// solved or yields non-finite values.
pub fn solve_c2_derivatives(points: &[Vector2]) -> Result<Vec<Vector2>> {
    let n = points.len();
    trace!(size = n, "solving C2 derivative system");
    if n < 2 {
        return Err(GeometryError::SingularSystem { size: n }.into());
    }

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();

    let lu = system_matrix(n).lu();
    let singular = || GeometryError::SingularSystem { size: n };
    let dx = lu.solve(&right_hand_side(&xs)).ok_or_else(singular)?;
    let dy = lu.solve(&right_hand_side(&ys)).ok_or_else(singular)?;

    if dx.iter().chain(dy.iter()).any(|v| !v.is_finite()) {
        return Err(singular().into());
    }

    Ok(dx
        .iter()
        .zip(dy.iter())
        .map(|(&x, &y)| Vector2::new(x, y))
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CurvelabError;
    use approx::assert_relative_eq;

    #[test]
    fn matrix_layout() {
        let a = system_matrix(4);
        let expected = DMatrix::from_row_slice(
            4,
            4,
            &[
                2.0, 1.0, 0.0, 0.0, //
                1.0, 4.0, 1.0, 0.0, //
                0.0, 1.0, 4.0, 1.0, //
                0.0, 0.0, 1.0, 2.0,
            ],
        );
        assert_eq!(a, expected);
    }

    #[test]
    fn two_point_system_is_degenerate_but_solvable() {
        assert_eq!(
            system_matrix(2),
            DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0])
        );
        let d = solve_c2_derivatives(&[Vector2::new(0.0, 0.0), Vector2::new(3.0, 6.0)]).unwrap();
        // 2a + b = 9, a + 2b = 9  =>  a = b = 3 (x); likewise 6 for y.
        assert_relative_eq!(d[0], Vector2::new(3.0, 6.0), epsilon = 1e-12);
        assert_relative_eq!(d[1], Vector2::new(3.0, 6.0), epsilon = 1e-12);
    }

    #[test]
    fn rhs_uses_one_sided_ends() {
        let rhs = right_hand_side(&[0.0, 1.0, 4.0, 9.0]);
        assert_relative_eq!(rhs[0], 3.0);
        assert_relative_eq!(rhs[1], 12.0);
        assert_relative_eq!(rhs[2], 24.0);
        assert_relative_eq!(rhs[3], 15.0);
    }

    #[test]
    fn solution_satisfies_system() {
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(-1.0, 4.0),
            Vector2::new(3.0, 3.0),
            Vector2::new(4.0, 7.0),
            Vector2::new(6.0, 2.0),
        ];
        let d = solve_c2_derivatives(&points).unwrap();
        let n = points.len();
        for k in 1..n - 1 {
            let lhs = d[k - 1] + d[k] * 4.0 + d[k + 1];
            assert_relative_eq!(lhs, (points[k + 1] - points[k - 1]) * 3.0, epsilon = 1e-9);
        }
        assert_relative_eq!(d[0] * 2.0 + d[1], (points[1] - points[0]) * 3.0, epsilon = 1e-9);
        assert_relative_eq!(
            d[n - 2] + d[n - 1] * 2.0,
            (points[n - 1] - points[n - 2]) * 3.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn collinear_uniform_points_give_constant_derivative() {
        let points: Vec<Vector2> = (0..6).map(|i| Vector2::new(f64::from(i), 0.0)).collect();
        let d = solve_c2_derivatives(&points).unwrap();
        for v in d {
            assert_relative_eq!(v, Vector2::new(1.0, 0.0), epsilon = 1e-9);
        }
    }

    #[test]
    fn single_point_is_rejected() {
        let err = solve_c2_derivatives(&[Vector2::zeros()]).unwrap_err();
        assert!(matches!(
            err,
            CurvelabError::Geometry(GeometryError::SingularSystem { size: 1 })
        ));
    }
}
