//! Dense linear solves for the boundary-coupled spline systems.
//!
//! The natural and cyclic cubic splines both reduce to `A·D = b`, where `D`
//! holds the first derivative at every knot. `A` has the `[1, 4, 1]` band in
//! its interior rows; the first and last rows depend on the [`Boundary`].
//! The cyclic corners fall outside the band, so the solve is a general dense
//! one with full pivoting.

use curvelab_core::traits::Validate;
use curvelab_core::{CurveError, Result, Tolerance};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::{Point2, Vector2};

/// End condition of a spline system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boundary {
    /// Zero second derivative at the first and last knot.
    Natural,
    /// Last knot coupled back to the first one (closed loop).
    Cyclic,
}

/// Build the `size`×`size` coefficient matrix for the given boundary.
///
/// Entries are assigned rather than accumulated, so for `size == 2` the
/// cyclic corners coincide with the band and the matrix is `[[4,1],[1,4]]`.
pub fn coupled_band_matrix(boundary: Boundary, size: usize) -> DMatrix<f64> {
    let mut a = DMatrix::zeros(size, size);
    if size == 0 {
        return a;
    }
    let last = size - 1;
    if last == 0 {
        a[(0, 0)] = match boundary {
            Boundary::Natural => 2.0,
            Boundary::Cyclic => 4.0,
        };
        return a;
    }

    for i in 1..last {
        a[(i, i - 1)] = 1.0;
        a[(i, i)] = 4.0;
        a[(i, i + 1)] = 1.0;
    }

    match boundary {
        Boundary::Natural => {
            a[(0, 0)] = 2.0;
            a[(0, 1)] = 1.0;
            a[(last, last - 1)] = 1.0;
            a[(last, last)] = 2.0;
        }
        Boundary::Cyclic => {
            a[(0, 0)] = 4.0;
            a[(0, 1)] = 1.0;
            a[(0, last)] = 1.0;
            a[(last, last - 1)] = 1.0;
            a[(last, last)] = 4.0;
            a[(last, 0)] = 1.0;
        }
    }

    a
}

/// Build the right-hand side for both axes: one row per knot, columns `x, y`.
///
/// Row `i` holds `3·(P[i+1] - P[i-1])`. Natural ends fall back to the single
/// neighbouring difference; cyclic ends wrap around.
pub fn tangent_rhs(boundary: Boundary, points: &[Point2]) -> DMatrix<f64> {
    let m = points.len();
    let mut b = DMatrix::zeros(m, 2);
    for i in 0..m {
        let (prev, next) = match boundary {
            Boundary::Natural => (points[i.saturating_sub(1)], points[(i + 1).min(m - 1)]),
            Boundary::Cyclic => (points[(i + m - 1) % m], points[(i + 1) % m]),
        };
        let diff = 3.0 * (next - prev);
        b[(i, 0)] = diff.x;
        b[(i, 1)] = diff.y;
    }
    b
}

/// Solve `matrix · X = rhs` for every column of `rhs`.
///
/// Fails with [`CurveError::SingularSystem`] when the fully pivoted LU
/// factor has a pivot ratio below `tolerance.pivot`, when the solution is not
/// finite, or when its residual exceeds `tolerance.residual`.
pub fn solve(
    matrix: &DMatrix<f64>,
    rhs: &DMatrix<f64>,
    tolerance: Tolerance,
) -> Result<DMatrix<f64>> {
    if !matrix.is_square() {
        return Err(CurveError::Dimension(format!(
            "coefficient matrix must be square, got {}x{}",
            matrix.nrows(),
            matrix.ncols()
        )));
    }
    if rhs.nrows() != matrix.nrows() {
        return Err(CurveError::Dimension(format!(
            "right-hand side has {} rows, matrix has {}",
            rhs.nrows(),
            matrix.nrows()
        )));
    }
    if matrix.nrows() == 0 {
        return Err(CurveError::SingularSystem("empty system".into()));
    }
    if matrix.iter().chain(rhs.iter()).any(|v| !v.is_finite()) {
        return Err(CurveError::SingularSystem("non-finite coefficients".into()));
    }

    let lu = matrix.clone().full_piv_lu();
    let (min_pivot, max_pivot) = lu
        .u()
        .diagonal()
        .iter()
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), p| (lo.min(p.abs()), hi.max(p.abs())));
    if !tolerance.pivots_ok(min_pivot, max_pivot) {
        return Err(CurveError::SingularSystem(format!(
            "pivot ratio {:e} / {:e} below tolerance {:e}",
            min_pivot, max_pivot, tolerance.pivot
        )));
    }

    let x = lu
        .solve(rhs)
        .ok_or_else(|| CurveError::SingularSystem("LU solve failed".into()))?;
    if x.iter().any(|v| !v.is_finite()) {
        return Err(CurveError::SingularSystem("non-finite solution".into()));
    }

    let residual = (matrix * &x - rhs).amax();
    if !tolerance.residual_ok(residual, rhs.amax()) {
        return Err(CurveError::SingularSystem(format!(
            "residual {:e} exceeds tolerance",
            residual
        )));
    }

    Ok(x)
}

/// A spline derivative system: coefficient matrix plus one column per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSystem {
    pub matrix: DMatrix<f64>,
    pub rhs: DMatrix<f64>,
}

impl SplineSystem {
    pub fn build(boundary: Boundary, points: &[Point2]) -> Self {
        Self {
            matrix: coupled_band_matrix(boundary, points.len()),
            rhs: tangent_rhs(boundary, points),
        }
    }

    /// Solve for the first derivative at every knot.
    pub fn solve(&self, tolerance: Tolerance) -> Result<Vec<Vector2>> {
        self.validate()?;
        let x = solve(&self.matrix, &self.rhs, tolerance)?;
        Ok(x.row_iter().map(|row| Vector2::new(row[0], row[1])).collect())
    }
}

impl Validate for SplineSystem {
    fn validate(&self) -> Result<()> {
        if !self.matrix.is_square() {
            return Err(CurveError::Dimension(format!(
                "spline matrix is {}x{}",
                self.matrix.nrows(),
                self.matrix.ncols()
            )));
        }
        if self.rhs.nrows() != self.matrix.nrows() || self.rhs.ncols() != 2 {
            return Err(CurveError::Dimension(format!(
                "spline rhs is {}x{}, expected {}x2",
                self.rhs.nrows(),
                self.rhs.ncols(),
                self.matrix.nrows()
            )));
        }
        Ok(())
    }
}
