//! Single cubic Bezier segment and the Bernstein blend shared by the
//! tangent-based schemes.

use curvelab_core::Result;
use curvelab_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{check_points, segment_count, Curve};
use crate::Scheme;

/// Cubic Bernstein blend of four control points.
///
/// Returns `p0` at `t = 0` and `p3` at `t = 1` exactly.
pub fn bernstein(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Point2 {
    let s = 1.0 - t;
    s * s * s * p0 + 3.0 * s * s * t * p1 + 3.0 * s * t * t * p2 + t * t * t * p3
}

/// First derivative of [`bernstein`] with respect to `t`.
pub fn bernstein_derivative(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Vector2 {
    let s = 1.0 - t;
    3.0 * s * s * (p1 - p0) + 6.0 * s * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// The first four points as one cubic Bezier on segment 0.
///
/// Every other segment is pinned to the fourth control point; with more than
/// four points the remaining ones only widen the addressable segment range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve {
    pub controls: [Point2; 4],
    pub segments: usize,
    pub closed: bool,
}

impl BezierCurve {
    pub fn new(points: &[Point2], closed: bool) -> Result<Self> {
        check_points(Scheme::Bezier, points)?;
        Ok(Self {
            controls: [points[0], points[1], points[2], points[3]],
            segments: segment_count(points.len(), closed),
            closed,
        })
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.controls;
        if segment == 0 {
            bernstein(p0, p1, p2, p3, t)
        } else {
            p3
        }
    }

    fn tangent_at(&self, segment: usize, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.controls;
        if segment == 0 {
            bernstein_derivative(p0, p1, p2, p3, t)
        } else {
            Vector2::ZERO
        }
    }

    fn segment_count(&self) -> usize {
        self.segments
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
