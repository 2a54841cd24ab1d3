//! Curve trait and one implementation per interpolation scheme.

mod bezier;
mod bspline;
mod catmull_rom;
mod hermite;
mod lagrange;
mod linear;
mod natural;

use curvelab_core::{CurveError, Result};
use curvelab_math::{Point2, Vector2};

use crate::Scheme;

pub use bezier::{bernstein, bernstein_derivative, BezierCurve};
pub use bspline::UniformBSpline;
pub use catmull_rom::{end_tangent, quadratic_fit, start_tangent, CatmullRomCurve};
pub use hermite::{hermite_controls, HermiteCurve};
pub use lagrange::LagrangeCurve;
pub use linear::LinearCurve;
pub use natural::{CubicCoefficients, NaturalSpline};

/// A piecewise 2D curve addressed by segment index and local parameter.
///
/// Implementations assume `segment < segment_count()` and `t` in `[0, 1]`;
/// [`crate::PreparedCurve`] checks samples before they get here.
pub trait Curve: std::fmt::Debug + Send + Sync {
    /// Evaluate the position at local parameter `t` of `segment`.
    ///
    /// # Panics
    ///
    /// May panic if `segment >= self.segment_count()`.
    fn point_at(&self, segment: usize, t: f64) -> Point2;

    /// Evaluate the first derivative with respect to the local parameter.
    ///
    /// # Panics
    ///
    /// May panic if `segment >= self.segment_count()`.
    fn tangent_at(&self, segment: usize, t: f64) -> Vector2;

    /// Number of addressable segments.
    fn segment_count(&self) -> usize;

    /// Whether the last segment wraps back to the first point.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Segments for `point_count` points: one per consecutive pair, plus the
/// wrap segment when closed.
pub fn segment_count(point_count: usize, closed: bool) -> usize {
    match point_count {
        0 => 0,
        n if closed => n,
        n => n - 1,
    }
}

/// Reject sequences that are too short for `scheme` or carry non-finite
/// coordinates.
pub(crate) fn check_points(scheme: Scheme, points: &[Point2]) -> Result<()> {
    let required = scheme.min_points();
    if points.len() < required {
        return Err(CurveError::InsufficientPoints {
            scheme: scheme.name(),
            required,
            found: points.len(),
        });
    }
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(CurveError::InvalidPoint { index }),
        None => Ok(()),
    }
}
