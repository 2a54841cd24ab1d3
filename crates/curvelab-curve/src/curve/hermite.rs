//! Cubic Hermite segments with fixed end tangents.

use curvelab_core::Result;
use curvelab_math::{DVec2, Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::bezier::{bernstein, bernstein_derivative};
use super::{check_points, segment_count, Curve};
use crate::Scheme;

/// Convert a Hermite segment (`p0` leaving with `v0`, `p3` arriving with
/// `v1`) to its four Bezier control points.
pub fn hermite_controls(p0: Point2, v0: Vector2, v1: Vector2, p3: Point2) -> [Point2; 4] {
    [p0, p0 + v0 / 3.0, p3 - v1 / 3.0, p3]
}

/// Hermite segments whose tangents do not depend on the data: every segment
/// leaves with [`HermiteCurve::START_TANGENT`] and arrives with
/// [`HermiteCurve::END_TANGENT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HermiteCurve {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl HermiteCurve {
    pub const START_TANGENT: Vector2 = DVec2::new(120.0, 0.0);
    pub const END_TANGENT: Vector2 = DVec2::new(90.0, 0.0);

    pub fn new(points: &[Point2], closed: bool) -> Result<Self> {
        check_points(Scheme::Hermite, points)?;
        Ok(Self {
            points: points.to_vec(),
            closed,
        })
    }

    fn controls(&self, segment: usize) -> [Point2; 4] {
        let p0 = self.points[segment];
        let p3 = self.points[(segment + 1) % self.points.len()];
        hermite_controls(p0, Self::START_TANGENT, Self::END_TANGENT, p3)
    }
}

impl Curve for HermiteCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.controls(segment);
        bernstein(p0, p1, p2, p3, t)
    }

    fn tangent_at(&self, segment: usize, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.controls(segment);
        bernstein_derivative(p0, p1, p2, p3, t)
    }

    fn segment_count(&self) -> usize {
        segment_count(self.points.len(), self.closed)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use curvelab_math::dvec2;

    fn row() -> Vec<Point2> {
        (0..5).map(|i| dvec2(100.0 * i as f64, 50.0)).collect()
    }

    #[test]
    fn test_hermite_controls() {
        let [p0, p1, p2, p3] = hermite_controls(
            dvec2(0.0, 0.0),
            dvec2(3.0, 0.0),
            dvec2(0.0, 6.0),
            dvec2(4.0, 4.0),
        );
        assert_eq!(p0, dvec2(0.0, 0.0));
        assert_eq!(p1, dvec2(1.0, 0.0));
        assert_eq!(p2, dvec2(4.0, 2.0));
        assert_eq!(p3, dvec2(4.0, 4.0));
    }

    #[test]
    fn test_hermite_fixed_tangents() {
        let curve = HermiteCurve::new(&row(), false).unwrap();
        for k in 0..curve.segment_count() {
            let start = curve.tangent_at(k, 0.0);
            let end = curve.tangent_at(k, 1.0);
            assert_abs_diff_eq!(start.x, 120.0, epsilon = 1e-9);
            assert_abs_diff_eq!(end.x, 90.0, epsilon = 1e-9);
            assert_eq!(start.y, 0.0);
        }
    }

    #[test]
    fn test_hermite_interpolates_points() {
        let pts = row();
        let curve = HermiteCurve::new(&pts, true).unwrap();
        assert_eq!(curve.segment_count(), 5);
        for k in 0..pts.len() {
            assert_eq!(curve.point_at(k, 0.0), pts[k]);
            assert_eq!(curve.point_at(k, 1.0), pts[(k + 1) % pts.len()]);
        }
    }
}
