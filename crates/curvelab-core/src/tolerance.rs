/// Numerical tolerances for the linear solves behind the spline schemes.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Relative pivot threshold: a system is singular when its smallest
    /// pivot is at most `pivot` times its largest one.
    pub pivot: f64,
    /// Relative residual bound: `|A·x - b|∞ <= residual * (1 + |b|∞)`.
    pub residual: f64,
}

impl Tolerance {
    pub const DEFAULT_PIVOT: f64 = 1e-12;
    pub const DEFAULT_RESIDUAL: f64 = 1e-9;

    pub fn new(pivot: f64, residual: f64) -> Self {
        Self { pivot, residual }
    }

    pub fn default_precision() -> Self {
        Self {
            pivot: Self::DEFAULT_PIVOT,
            residual: Self::DEFAULT_RESIDUAL,
        }
    }

    pub fn loose() -> Self {
        Self {
            pivot: 1e-15,
            residual: 1e-6,
        }
    }

    pub fn tight() -> Self {
        Self {
            pivot: 1e-8,
            residual: 1e-12,
        }
    }

    /// Check whether the ratio between the smallest and largest pivot
    /// magnitudes is still acceptable.
    pub fn pivots_ok(self, min_pivot: f64, max_pivot: f64) -> bool {
        max_pivot > 0.0 && min_pivot > self.pivot * max_pivot
    }

    /// Check a solve residual against the scale of the right-hand side.
    pub fn residual_ok(self, residual: f64, rhs_norm: f64) -> bool {
        residual <= self.residual * (1.0 + rhs_norm)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
