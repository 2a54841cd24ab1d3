//! Piecewise-linear curve.

use curvelab_core::Result;
use curvelab_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{check_points, segment_count, Curve};
use crate::Scheme;

/// Straight segments between consecutive points: `(1-t)·P[k] + t·P[k+1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearCurve {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl LinearCurve {
    pub fn new(points: &[Point2], closed: bool) -> Result<Self> {
        check_points(Scheme::Linear, points)?;
        Ok(Self {
            points: points.to_vec(),
            closed,
        })
    }

    fn ends(&self, segment: usize) -> (Point2, Point2) {
        let next = (segment + 1) % self.points.len();
        (self.points[segment], self.points[next])
    }
}

impl Curve for LinearCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let (p0, p1) = self.ends(segment);
        (1.0 - t) * p0 + t * p1
    }

    fn tangent_at(&self, segment: usize, _t: f64) -> Vector2 {
        let (p0, p1) = self.ends(segment);
        p1 - p0
    }

    fn segment_count(&self) -> usize {
        segment_count(self.points.len(), self.closed)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
