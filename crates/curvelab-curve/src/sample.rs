//! Sample requests and sampled output.

use std::ops::Index;

use approx::AbsDiffEq;
use curvelab_core::traits::BoundingBox;
use curvelab_math::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

/// A position request: local parameter `t` in `[0, 1]` on `segment`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub segment: usize,
    pub t: f64,
}

impl Sample {
    pub const fn new(segment: usize, t: f64) -> Self {
        Self { segment, t }
    }
}

impl From<(usize, f64)> for Sample {
    fn from((segment, t): (usize, f64)) -> Self {
        Self::new(segment, t)
    }
}

/// Evaluated positions, one per requested sample, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    points: Vec<Point2>,
}

impl SampledCurve {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    pub fn aabb(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.points)
    }
}

impl Index<usize> for SampledCurve {
    type Output = Point2;

    fn index(&self, index: usize) -> &Point2 {
        &self.points[index]
    }
}

impl FromIterator<Point2> for SampledCurve {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SampledCurve {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl BoundingBox for SampledCurve {
    type Point = Point2;

    fn bounding_box(&self) -> Option<(Point2, Point2)> {
        self.aabb().map(|b| (b.min, b.max))
    }
}

impl AbsDiffEq for SampledCurve {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| a.abs_diff_eq(b, epsilon))
    }
}
