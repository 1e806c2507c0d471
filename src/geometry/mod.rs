pub mod curve;

pub use curve::{
    AnyCurve, C2Spline, CurvatureTrace, CurveDomain, CurveOptions, HermiteOptions, HermiteSegment,
    HermiteSpline, HyperparameterDescriptor, HyperparameterValue, LagrangePolynomial,
    ParametricCurve, TangentMode,
};
