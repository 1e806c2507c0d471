//! Curvelab trace demo — builds a curve from typed coordinates and logs its
//! samples and curvature profile.
//!
//! Usage:
//! ```text
//! cargo run --example trace -- "0 0 -1 4 3 3 4 7"            # hermite (default)
//! cargo run --example trace -- "0 0 -1 4 3 3 4 7" c2
//! RUST_LOG=curvelab=debug cargo run --example trace -- "0 0 1 1 2 4" lagrange
//! ```

use curvelab::geometry::{AnyCurve, CurveOptions, ParametricCurve};
use curvelab::math::coords::{points_from_str, points_to_string};
use curvelab::math::knots;
use curvelab::{ConfigurationError, CurvelabError};
use tracing::info;

const SAMPLES: usize = 16;
const TRACE_RESOLUTION: usize = 20;

fn main() -> Result<(), CurvelabError> {
    // Default: WARN for everything, INFO for the demo and curvelab.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvelab=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trace=info".parse().unwrap_or_default())
        .add_directive("curvelab=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let coords = args.next().unwrap_or_else(|| "0 0 -1 4 3 3 4 7".to_owned());
    let options = match args.next().as_deref() {
        None | Some("hermite") => CurveOptions::default(),
        Some("c2") => CurveOptions::C2,
        Some("lagrange") => CurveOptions::Lagrange,
        Some(other) => {
            return Err(ConfigurationError::InvalidHyperparameterValue {
                name: "family",
                value: other.to_owned(),
            }
            .into());
        }
    };

    let points = points_from_str(&coords)?;
    let knots = knots::indices(points.len());
    let curve = AnyCurve::construct(points, knots, options)?;
    info!(
        curve = curve.curve_type(),
        points = %points_to_string(curve.control_points()),
        "constructed"
    );
    for (name, value) in curve.hyperparameter_values() {
        info!(name, ?value, "hyperparameter");
    }

    let samples = curve.sample(SAMPLES);
    info!(count = samples.len(), polyline = %points_to_string(&samples), "sampled");

    let trace = curve.curvature_trace(TRACE_RESOLUTION);
    let (peak_t, peak_k) = trace
        .params
        .iter()
        .zip(&trace.values)
        .fold((0.0, 0.0), |best, (&t, &k)| if k > best.1 { (t, k) } else { best });
    info!(samples = trace.len(), peak_t, peak_k, "curvature");

    Ok(())
}
