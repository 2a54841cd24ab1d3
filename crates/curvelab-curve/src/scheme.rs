//! Interpolation scheme selector.

use std::fmt;
use std::str::FromStr;

use curvelab_core::CurveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Linear,
    Lagrange,
    Bezier,
    Hermite,
    CatmullRom,
    BSpline,
    NaturalSpline,
    NaturalSplineClosed,
}

impl Scheme {
    pub const ALL: [Scheme; 8] = [
        Scheme::Linear,
        Scheme::Lagrange,
        Scheme::Bezier,
        Scheme::Hermite,
        Scheme::CatmullRom,
        Scheme::BSpline,
        Scheme::NaturalSpline,
        Scheme::NaturalSplineClosed,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Linear => "linear",
            Scheme::Lagrange => "lagrange",
            Scheme::Bezier => "bezier",
            Scheme::Hermite => "hermite",
            Scheme::CatmullRom => "catmull-rom",
            Scheme::BSpline => "b-spline",
            Scheme::NaturalSpline => "natural-spline",
            Scheme::NaturalSplineClosed => "natural-spline-closed",
        }
    }

    /// Fewest points the scheme can be built from.
    pub fn min_points(self) -> usize {
        match self {
            Scheme::Bezier | Scheme::Hermite => 4,
            _ => 2,
        }
    }

    pub fn forces_closed(self) -> bool {
        self == Scheme::NaturalSplineClosed
    }

    /// The closed flag actually used when evaluating with this scheme.
    ///
    /// The open natural spline is defined by its free ends, so it ignores the
    /// caller's flag.
    pub fn effective_closed(self, closed: bool) -> bool {
        match self {
            Scheme::NaturalSplineClosed => true,
            Scheme::NaturalSpline => false,
            _ => closed,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = CurveError;

    /// Accepts the identifiers from [`Scheme::name`] and the menu labels
    /// of the curve editor ("Lagrangian", "Catmull", "Natural Closed", ...),
    /// ignoring case and treating spaces and underscores as dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        let scheme = match key.as_str() {
            "linear" => Scheme::Linear,
            "lagrange" | "lagrangian" => Scheme::Lagrange,
            "bezier" => Scheme::Bezier,
            "hermite" => Scheme::Hermite,
            "catmull-rom" | "catmull" => Scheme::CatmullRom,
            "b-spline" | "bspline" => Scheme::BSpline,
            "natural-spline" | "natural" => Scheme::NaturalSpline,
            "natural-spline-closed" | "natural-closed" => Scheme::NaturalSplineClosed,
            _ => return Err(CurveError::Parse(format!("unknown curve scheme '{}'", s))),
        };
        Ok(scheme)
    }
}
