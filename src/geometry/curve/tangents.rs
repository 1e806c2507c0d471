use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::math::Vector2;

/// How the tangents at the two end knots are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TangentMode {
    /// Both end tangents are zero.
    Zero,
    /// End tangents are the one-sided secants through the two end points.
    #[default]
    Approximated,
}

impl TangentMode {
    /// Names accepted by [`FromStr`], in declaration order.
    pub const NAMES: &'static [&'static str] = &["zero", "approximated"];

    /// Returns the textual name of the mode.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Approximated => "approximated",
        }
    }
}

impl fmt::Display for TangentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TangentMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(Self::Zero),
            "approximated" => Ok(Self::Approximated),
            other => Err(ConfigurationError::InvalidHyperparameterValue {
                name: "tangent",
                value: other.to_owned(),
            }),
        }
    }
}

/// Estimates one tangent per knot.
///
/// Interior knots use the tension-scaled central secant
/// `(P[k+1] - P[k-1]) * (1 - tension) / (t[k+1] - t[k-1])`; the end knots
/// follow `mode`. `tension = 0` gives Catmull-Rom tangents, `tension = 1`
/// flattens every interior tangent to zero.
///
/// Inputs are assumed validated: equal lengths, at least two points,
/// strictly increasing knots.
#[must_use]
pub fn estimate_tangents(
    points: &[Vector2],
    knots: &[f64],
    tension: f64,
    mode: TangentMode,
) -> Vec<Vector2> {
    let n = points.len();
    if n < 2 {
        return vec![Vector2::zeros(); n];
    }

    let (first, last) = match mode {
        TangentMode::Zero => (Vector2::zeros(), Vector2::zeros()),
        TangentMode::Approximated => (
            (points[1] - points[0]) / (knots[1] - knots[0]),
            (points[n - 1] - points[n - 2]) / (knots[n - 1] - knots[n - 2]),
        ),
    };

    let mut tangents = Vec::with_capacity(n);
    tangents.push(first);
    tangents.extend((1..n - 1).map(|k| {
        (points[k + 1] - points[k - 1]) * (1.0 - tension) / (knots[k + 1] - knots[k - 1])
    }));
    tangents.push(last);
    tangents
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zigzag() -> (Vec<Vector2>, Vec<f64>) {
        (
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(-1.0, 4.0),
                Vector2::new(3.0, 3.0),
                Vector2::new(4.0, 7.0),
            ],
            vec![0.0, 1.0, 2.0, 4.0],
        )
    }

    #[test]
    fn approximated_ends_are_secants() {
        let (p, t) = zigzag();
        let m = estimate_tangents(&p, &t, 0.0, TangentMode::Approximated);
        assert_eq!(m.len(), 4);
        assert_relative_eq!(m[0], Vector2::new(-1.0, 4.0));
        assert_relative_eq!(m[3], Vector2::new(0.5, 2.0));
    }

    #[test]
    fn zero_ends() {
        let (p, t) = zigzag();
        let m = estimate_tangents(&p, &t, 0.3, TangentMode::Zero);
        assert_relative_eq!(m[0], Vector2::zeros());
        assert_relative_eq!(m[3], Vector2::zeros());
    }

    #[test]
    fn interior_uses_central_secant() {
        let (p, t) = zigzag();
        let m = estimate_tangents(&p, &t, 0.0, TangentMode::Zero);
        // (P2 - P0) / (t2 - t0) and (P3 - P1) / (t3 - t1)
        assert_relative_eq!(m[1], Vector2::new(1.5, 1.5));
        assert_relative_eq!(m[2], Vector2::new(5.0 / 3.0, 1.0), epsilon = 1e-12);

        let half = estimate_tangents(&p, &t, 0.5, TangentMode::Zero);
        assert_relative_eq!(half[1], m[1] * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn full_tension_flattens_interior() {
        let (p, t) = zigzag();
        for mode in [TangentMode::Zero, TangentMode::Approximated] {
            let m = estimate_tangents(&p, &t, 1.0, mode);
            for tangent in &m[1..3] {
                assert_relative_eq!(*tangent, Vector2::zeros());
            }
        }
    }

    #[test]
    fn two_points_have_only_ends() {
        let p = [Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0)];
        let m = estimate_tangents(&p, &[0.0, 2.0], 0.5, TangentMode::Approximated);
        assert_eq!(m.len(), 2);
        assert_relative_eq!(m[0], Vector2::new(1.0, 1.0));
        assert_relative_eq!(m[1], Vector2::new(1.0, 1.0));
    }

    #[test]
    fn mode_names_round_trip() {
        for name in TangentMode::NAMES {
            let mode: TangentMode = name.parse().unwrap();
            assert_eq!(mode.to_string(), *name);
        }
        assert!("flat".parse::<TangentMode>().is_err());
    }
}
