use crate::math::{linspace, Vector2};

use super::{capacity_hint, CurvatureTrace, HermiteSegment};

/// Interpolation points, knots and tangents of a piecewise Hermite spline,
/// with one [`HermiteSegment`] per knot interval.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SplicedHermite {
    pub(crate) points: Vec<Vector2>,
    pub(crate) knots: Vec<f64>,
    pub(crate) tangents: Vec<Vector2>,
    pub(crate) segments: Vec<HermiteSegment>,
}

impl SplicedHermite {
    /// Joins consecutive points with Hermite segments. Lengths must match.
    pub(crate) fn new(points: Vec<Vector2>, knots: Vec<f64>, tangents: Vec<Vector2>) -> Self {
        let segments = points
            .windows(2)
            .zip(tangents.windows(2))
            .map(|(p, m)| HermiteSegment::new(p[0], p[1], m[0], m[1]))
            .collect();
        Self {
            points,
            knots,
            tangents,
            segments,
        }
    }

    /// Concatenated segment samples.
    ///
    /// `resolution` is floor-divided over the segments, the remainder going
    /// to the first ones; each segment yields at least its two end points so
    /// the polyline always runs from the first to the last control point.
    pub(crate) fn sample(&self, resolution: usize) -> Vec<Vector2> {
        let count = self.segments.len();
        if count == 0 {
            return Vec::new();
        }
        let base = resolution / count;
        let extra = resolution % count;
        let mut out = Vec::with_capacity(capacity_hint(count, base.max(2)));
        for (k, segment) in self.segments.iter().enumerate() {
            let per_segment = (base + usize::from(k < extra)).max(2);
            out.extend(segment.points(per_segment));
        }
        out
    }

    /// Curvature at `resolution` evenly spaced local parameters per segment,
    /// reported against the absolute knot parameter.
    pub(crate) fn curvature_trace(&self, resolution: usize) -> CurvatureTrace {
        let capacity = capacity_hint(self.segments.len(), resolution);
        let mut trace = CurvatureTrace::with_capacity(capacity);
        for (segment, span) in self.segments.iter().zip(self.knots.windows(2)) {
            for u in linspace(0.0, 1.0, resolution) {
                trace.push(span[0] + (span[1] - span[0]) * u, segment.curvature(u));
            }
        }
        trace
    }
}
