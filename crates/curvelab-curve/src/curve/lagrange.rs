//! Global Lagrange interpolation.

use curvelab_core::Result;
use curvelab_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{check_points, segment_count, Curve};
use crate::Scheme;

/// A single polynomial through every point, with node `i` at global
/// parameter `T = i` and `T = segment + t`.
///
/// Every sample touches every node. High point counts oscillate (Runge
/// phenomenon); that is inherent to the scheme.
///
/// When closed, the first point is repeated as an extra node at `T = n`, so
/// the wrap segment returns to the start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LagrangeCurve {
    pub nodes: Vec<Point2>,
    pub closed: bool,
}

impl LagrangeCurve {
    pub fn new(points: &[Point2], closed: bool) -> Result<Self> {
        check_points(Scheme::Lagrange, points)?;
        let mut nodes = points.to_vec();
        if closed {
            nodes.push(points[0]);
        }
        Ok(Self { nodes, closed })
    }

    /// Product of `(T - j) / (i - j)` over every node `j` other than `i` and
    /// `skip`. Each factor is applied as a ratio so the running value stays
    /// finite for long node lists, and `L_i(i)` is exactly one.
    fn ratio_product(&self, i: usize, skip: Option<usize>, big_t: f64) -> f64 {
        (0..self.nodes.len())
            .filter(|&j| j != i && Some(j) != skip)
            .fold(1.0, |acc, j| {
                acc * ((big_t - j as f64) / (i as f64 - j as f64))
            })
    }

    /// Basis value `L_i(T)`.
    fn basis(&self, i: usize, big_t: f64) -> f64 {
        self.ratio_product(i, None, big_t)
    }

    /// Derivative `L_i'(T)`, summing the products with one factor removed.
    fn basis_derivative(&self, i: usize, big_t: f64) -> f64 {
        (0..self.nodes.len())
            .filter(|&l| l != i)
            .map(|l| self.ratio_product(i, Some(l), big_t) / (i as f64 - l as f64))
            .sum()
    }
}

impl Curve for LagrangeCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let big_t = segment as f64 + t;
        self.nodes
            .iter()
            .enumerate()
            .fold(Point2::ZERO, |acc, (i, &p)| acc + self.basis(i, big_t) * p)
    }

    fn tangent_at(&self, segment: usize, t: f64) -> Vector2 {
        let big_t = segment as f64 + t;
        self.nodes
            .iter()
            .enumerate()
            .fold(Vector2::ZERO, |acc, (i, &p)| {
                acc + self.basis_derivative(i, big_t) * p
            })
    }

    fn segment_count(&self) -> usize {
        let points = self.nodes.len() - usize::from(self.closed);
        segment_count(points, self.closed)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
