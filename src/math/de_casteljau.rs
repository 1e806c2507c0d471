use super::Vector2;

/// Evaluates the Bézier curve with control polygon `control` at parameter `t`.
///
/// Each pass replaces the `n`-point polygon by the `n - 1` points
/// `(1 - t) * P[i] + t * P[i + 1]` until one point remains. `t` is not
/// clamped: values outside `[0, 1]` extrapolate the curve.
///
/// An empty polygon evaluates to the zero vector.
#[must_use]
pub fn evaluate(control: &[Vector2], t: f64) -> Vector2 {
    let mut work = control.to_vec();
    let s = 1.0 - t;
    for len in (1..work.len()).rev() {
        for i in 0..len {
            work[i] = work[i] * s + work[i + 1] * t;
        }
    }
    work.first().copied().unwrap_or_else(Vector2::zeros)
}
