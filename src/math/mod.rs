pub mod aitken_neville;
pub mod c2_system;
pub mod coords;
pub mod curvature;
pub mod de_casteljau;
pub mod knots;

/// 2D point/vector type shared by every curve family.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `count` values evenly spaced over `[start, end]`, ends included.
///
/// A single sample sits at `start`; zero samples yields an empty iterator.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| {
        if i + 1 == count && count > 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let v: Vec<f64> = linspace(0.0, 1.0, 5).collect();
        assert_eq!(v.len(), 5);
        assert!((v[0]).abs() < TOLERANCE);
        assert!((v[2] - 0.5).abs() < TOLERANCE);
        assert!((v[4] - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert_eq!(linspace(2.0, 3.0, 0).count(), 0);
        let single: Vec<f64> = linspace(2.0, 3.0, 1).collect();
        assert_eq!(single.len(), 1);
        assert!((single[0] - 2.0).abs() < TOLERANCE);
    }
}
