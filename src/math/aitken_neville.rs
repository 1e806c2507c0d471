use super::Vector2;

/// Evaluates the interpolation polynomial at `t`.
///
/// `params` must be pairwise distinct; that is checked when a curve is built.
///
/// Row `k` of the Neville triangle overwrites the buffer in place:
/// `T[i] <- T[i] * (t[i+k] - t) / (t[i+k] - t[i]) + T[i+1] * (t - t[i]) / (t[i+k] - t[i])`.
#[must_use]
pub fn evaluate(points: &[Vector2], params: &[f64], t: f64) -> Vector2 {
    let n = points.len().min(params.len());
    let mut row = points[..n].to_vec();
    for k in 1..n {
        for i in 0..n - k {
            let span = params[i + k] - params[i];
            row[i] = row[i] * ((params[i + k] - t) / span) + row[i + 1] * ((t - params[i]) / span);
        }
    }
    row.first().copied().unwrap_or_else(Vector2::zeros)
}

/// First derivative of the interpolation polynomial at `t`.
///
/// `x'(t) = Σ_i P_i · L_i'(t)` with
/// `L_i'(t) = Σ_{j≠i} 1/(t_i - t_j) · Π_{k≠i,j} (t - t_k)/(t_i - t_k)`.
/// Cost is `O(n³)` per call.
#[must_use]
pub fn first_derivative(points: &[Vector2], params: &[f64], t: f64) -> Vector2 {
    let n = points.len().min(params.len());
    let mut sum = Vector2::zeros();
    for i in 0..n {
        let mut basis = 0.0;
        for j in (0..n).filter(|&j| j != i) {
            let product = basis_product(params, t, i, &[i, j]);
            basis += product / (params[i] - params[j]);
        }
        sum += points[i] * basis;
    }
    sum
}

/// Second derivative of the interpolation polynomial at `t`.
///
/// `L_i''(t) = Σ_{j≠i} 1/(t_i - t_j) · Σ_{k≠i,j} 1/(t_i - t_k) · Π_{p≠i,j,k} (t - t_p)/(t_i - t_p)`
/// (the `k` sum is the derivative of the `j`-th product).
/// Cost is `O(n⁴)` per call.
#[must_use]
pub fn second_derivative(points: &[Vector2], params: &[f64], t: f64) -> Vector2 {
    let n = points.len().min(params.len());
    let mut sum = Vector2::zeros();
    for i in 0..n {
        let mut basis = 0.0;
        for j in (0..n).filter(|&j| j != i) {
            let mut inner = 0.0;
            for k in (0..n).filter(|&k| k != i && k != j) {
                let product = basis_product(params, t, i, &[i, j, k]);
                inner += product / (params[i] - params[k]);
            }
            basis += inner / (params[i] - params[j]);
        }
        sum += points[i] * basis;
    }
    sum
}

/// `Π_{p ∉ skip} (t - t_p) / (t_i - t_p)`.
fn basis_product(params: &[f64], t: f64, i: usize, skip: &[usize]) -> f64 {
    params
        .iter()
        .enumerate()
        .filter(|(p, _)| !skip.contains(p))
        .map(|(_, &tp)| (t - tp) / (params[i] - tp))
        .product()
}
