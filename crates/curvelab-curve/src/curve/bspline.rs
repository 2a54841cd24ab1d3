//! Uniform cubic B-spline.

use curvelab_core::Result;
use curvelab_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{check_points, segment_count, Curve};
use crate::Scheme;

/// Uniform cubic basis weights for `P[k-1], P[k], P[k+1], P[k+2]`.
fn basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let s = 1.0 - t;
    [
        s * s * s / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

/// Derivatives of [`basis`] with respect to `t`.
fn basis_derivative(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let s = 1.0 - t;
    [
        -0.5 * s * s,
        (9.0 * t2 - 12.0 * t) / 6.0,
        (-9.0 * t2 + 6.0 * t + 3.0) / 6.0,
        0.5 * t2,
    ]
}

/// Uniform cubic B-spline over the control polygon.
///
/// Open curves blend only where all four neighbours exist. Segment 0 is
/// pinned to `P[1]` and segments past `n - 3` to `P[n - 2]`, with no blend;
/// the join between a pinned and a blended segment is not continuous.
/// Closed curves wrap the neighbour indices and blend everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformBSpline {
    pub points: Vec<Point2>,
    pub closed: bool,
}

enum Span {
    Pinned(Point2),
    Blend([Point2; 4]),
}

impl UniformBSpline {
    pub fn new(points: &[Point2], closed: bool) -> Result<Self> {
        check_points(Scheme::BSpline, points)?;
        Ok(Self {
            points: points.to_vec(),
            closed,
        })
    }

    fn span(&self, segment: usize) -> Span {
        let n = self.points.len();
        if self.closed {
            let at = |offset: usize| self.points[(segment + offset + n - 1) % n];
            return Span::Blend([at(0), at(1), at(2), at(3)]);
        }
        if segment < 1 {
            Span::Pinned(self.points[1])
        } else if segment + 3 > n {
            Span::Pinned(self.points[n - 2])
        } else {
            let p = &self.points[segment - 1..segment + 3];
            Span::Blend([p[0], p[1], p[2], p[3]])
        }
    }
}

fn blend(points: [Point2; 4], weights: [f64; 4]) -> Point2 {
    points
        .iter()
        .zip(weights)
        .fold(Point2::ZERO, |acc, (&p, w)| acc + w * p)
}

impl Curve for UniformBSpline {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        match self.span(segment) {
            Span::Pinned(p) => p,
            Span::Blend(points) => blend(points, basis(t)),
        }
    }

    fn tangent_at(&self, segment: usize, t: f64) -> Vector2 {
        match self.span(segment) {
            Span::Pinned(_) => Vector2::ZERO,
            Span::Blend(points) => blend(points, basis_derivative(t)),
        }
    }

    fn segment_count(&self) -> usize {
        segment_count(self.points.len(), self.closed)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
