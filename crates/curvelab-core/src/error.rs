use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("Insufficient points: {scheme} needs at least {required}, got {found}")]
    InsufficientPoints {
        scheme: &'static str,
        required: usize,
        found: usize,
    },

    #[error("Singular system: {0}")]
    SingularSystem(String),

    #[error("Invalid sample #{index}: segment {segment} at t={t} (curve has {segments} segments)")]
    InvalidSample {
        index: usize,
        segment: usize,
        t: f64,
        segments: usize,
    },

    #[error("Invalid point #{index}: coordinates must be finite")]
    InvalidPoint { index: usize },

    #[error("Dimension mismatch: {0}")]
    Dimension(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;
