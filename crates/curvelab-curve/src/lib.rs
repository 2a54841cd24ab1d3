//! Curvelab curve evaluation: sampled 2D curves through ordered control points.
//!
//! A [`Scheme`] selects the interpolation rule, [`PreparedCurve`] snapshots
//! the points and performs the per-call precomputation, and [`evaluate`]
//! maps `(segment, t)` [`Sample`]s to positions.

pub mod curve;
pub mod evaluate;
pub mod sample;
pub mod sampling;
pub mod scheme;

pub use curve::Curve;
pub use evaluate::{evaluate, PreparedCurve};
pub use sample::{Sample, SampledCurve};
pub use sampling::{sample_curve, uniform_samples, DEFAULT_STEPS};
pub use scheme::Scheme;

pub use curvelab_core::{CurveError, Result, Tolerance};
pub use curvelab_math::{Point2, Vector2};
