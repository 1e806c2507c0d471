use std::fmt::Write as _;

use super::Vector2;
use crate::error::{ParseError, Result};

/// Parses whitespace-separated coordinates into points.
///
/// For example, `"0 3 1 2"` gives the points `(0, 3)` and `(1, 2)`.
///
/// # Errors
///
/// Returns [`ParseError::OddCoordinateCount`] if a coordinate is unmatched
/// and [`ParseError::InvalidNumber`] if a token is not a float.
pub fn points_from_str(s: &str) -> Result<Vec<Vector2>> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(ParseError::OddCoordinateCount(tokens.len()).into());
    }

    let parse = |token: &str| {
        token.parse::<f64>().map_err(|source| ParseError::InvalidNumber {
            token: token.to_owned(),
            source,
        })
    };

    tokens
        .chunks_exact(2)
        .map(|pair| -> Result<Vector2> { Ok(Vector2::new(parse(pair[0])?, parse(pair[1])?)) })
        .collect()
}

/// Formats points in the format read by [`points_from_str`].
#[must_use]
pub fn points_to_string(points: &[Vector2]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{} {}", p.x, p.y);
    }
    out
}
