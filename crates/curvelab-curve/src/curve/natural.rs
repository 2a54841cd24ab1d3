//! Natural and cyclic cubic splines.
//!
//! Both solve one linear system for the first derivative `D` at every knot
//! (see [`curvelab_math::linsys`]) and turn each pair of neighbouring knots
//! into power-basis coefficients.

use curvelab_core::{Result, Tolerance};
use curvelab_math::{Boundary, Point2, SplineSystem, Vector2};
use serde::{Deserialize, Serialize};

use super::{check_points, segment_count, Curve};
use crate::Scheme;

/// Per-segment cubic `f(t) = a + b·t + c·t² + d·t³`, both axes at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicCoefficients {
    pub a: Vector2,
    pub b: Vector2,
    pub c: Vector2,
    pub d: Vector2,
}

impl CubicCoefficients {
    /// Coefficients of the cubic from `p0` to `p1` with end derivatives
    /// `d0` and `d1`.
    pub fn from_hermite(p0: Point2, p1: Point2, d0: Vector2, d1: Vector2) -> Self {
        Self {
            a: p0,
            b: d0,
            c: 3.0 * (p1 - p0) - 2.0 * d0 - d1,
            d: 2.0 * (p0 - p1) + d0 + d1,
        }
    }

    pub fn position(&self, t: f64) -> Point2 {
        self.a + self.b * t + self.c * (t * t) + self.d * (t * t * t)
    }

    pub fn derivative(&self, t: f64) -> Vector2 {
        self.b + 2.0 * t * self.c + 3.0 * t * t * self.d
    }
}

/// Interpolating cubic spline with second-derivative continuity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturalSpline {
    pub boundary: Boundary,
    pub segments: Vec<CubicCoefficients>,
}

impl NaturalSpline {
    /// Solve the spline system for `points`.
    ///
    /// [`Boundary::Natural`] gives `n - 1` segments with zero curvature at
    /// both ends; [`Boundary::Cyclic`] adds the segment from the last point
    /// back to the first.
    pub fn new(points: &[Point2], boundary: Boundary, tolerance: Tolerance) -> Result<Self> {
        let scheme = match boundary {
            Boundary::Natural => Scheme::NaturalSpline,
            Boundary::Cyclic => Scheme::NaturalSplineClosed,
        };
        check_points(scheme, points)?;

        let derivs = SplineSystem::build(boundary, points).solve(tolerance)?;
        let n = points.len();
        let segments = (0..segment_count(n, boundary == Boundary::Cyclic))
            .map(|i| {
                let j = (i + 1) % n;
                CubicCoefficients::from_hermite(points[i], points[j], derivs[i], derivs[j])
            })
            .collect();

        Ok(Self { boundary, segments })
    }
}

impl Curve for NaturalSpline {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        self.segments[segment].position(t)
    }

    fn tangent_at(&self, segment: usize, t: f64) -> Vector2 {
        self.segments[segment].derivative(t)
    }

    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn is_closed(&self) -> bool {
        self.boundary == Boundary::Cyclic
    }
}
