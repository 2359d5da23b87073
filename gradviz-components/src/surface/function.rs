use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gradient::GradientVector;

/// One of the surfaces in the catalog.
///
/// The set is closed: every function ships with a hand-derived analytic
/// gradient, so arbitrary user-supplied formulas are not supported. Logic
/// dispatches on this enum, never on display text, which keeps presentation
/// labels (and their translations) out of the math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionId {
    /// A downward-opening paraboloid with a single maximum at the origin.
    Peak,
    /// A hyperbolic paraboloid with a saddle point at the origin.
    Saddle,
    /// A doubly periodic sin/cos surface.
    Waves,
}

/// Error returned when a name at the presentation boundary matches no
/// catalog entry.
///
/// Unrecognized names are rejected outright rather than falling back to a
/// default surface, so a renamed UI label cannot silently change the math.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown function {name:?}; expected one of \"Peak\", \"Saddle\", or \"Waves\"")]
pub struct UnknownFunctionError {
    pub name: String,
}

impl FunctionId {
    /// All catalog entries, in presentation order.
    pub const ALL: [FunctionId; 3] = [FunctionId::Peak, FunctionId::Saddle, FunctionId::Waves];

    /// The name shown in the function selector.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            FunctionId::Peak => "Peak (Paraboloid)",
            FunctionId::Saddle => "Saddle (Hyperbolic Paraboloid)",
            FunctionId::Waves => "Waves (Sin/Cos)",
        }
    }

    /// The formula label shown alongside computed values.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            FunctionId::Peak => "f(x, y) = 4 - x² - y²",
            FunctionId::Saddle => "f(x, y) = x² - y²",
            FunctionId::Waves => "f(x, y) = sin(x) · cos(y)",
        }
    }

    /// The surface height z = f(x, y).
    #[must_use]
    pub fn value(self, x: f64, y: f64) -> f64 {
        match self {
            FunctionId::Peak => 4.0 - x * x - y * y,
            FunctionId::Saddle => x * x - y * y,
            FunctionId::Waves => x.sin() * y.cos(),
        }
    }

    /// The analytic gradient (∂f/∂x, ∂f/∂y) at (x, y).
    ///
    /// These are the exact closed-form partial derivatives, not finite
    /// differences. The visualizer exists to show that the gradient *is*
    /// this vector, so an approximation here would defeat the point.
    #[must_use]
    pub fn gradient(self, x: f64, y: f64) -> GradientVector {
        match self {
            FunctionId::Peak => GradientVector {
                dx: -2.0 * x,
                dy: -2.0 * y,
            },
            FunctionId::Saddle => GradientVector {
                dx: 2.0 * x,
                dy: -2.0 * y,
            },
            FunctionId::Waves => GradientVector {
                dx: x.cos() * y.cos(),
                dy: -x.sin() * y.sin(),
            },
        }
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FunctionId {
    type Err = UnknownFunctionError;

    /// Parses either a variant name (`"Peak"`) or a full display name
    /// (`"Peak (Paraboloid)"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Peak" | "Peak (Paraboloid)" => Ok(FunctionId::Peak),
            "Saddle" | "Saddle (Hyperbolic Paraboloid)" => Ok(FunctionId::Saddle),
            "Waves" | "Waves (Sin/Cos)" => Ok(FunctionId::Waves),
            _ => Err(UnknownFunctionError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn peak_matches_closed_form() {
        assert_relative_eq!(FunctionId::Peak.value(0.0, 0.0), 4.0);
        assert_relative_eq!(FunctionId::Peak.value(1.0, -1.0), 2.0);

        let g = FunctionId::Peak.gradient(0.5, -1.5);
        assert_relative_eq!(g.dx, -1.0);
        assert_relative_eq!(g.dy, 3.0);
    }

    #[test]
    fn saddle_matches_closed_form() {
        assert_relative_eq!(FunctionId::Saddle.value(1.0, 1.0), 0.0);
        assert_relative_eq!(FunctionId::Saddle.value(2.0, 1.0), 3.0);

        let g = FunctionId::Saddle.gradient(1.0, 1.0);
        assert_relative_eq!(g.dx, 2.0);
        assert_relative_eq!(g.dy, -2.0);
    }

    #[test]
    fn waves_matches_closed_form() {
        assert_relative_eq!(FunctionId::Waves.value(0.0, 0.0), 0.0);

        let g = FunctionId::Waves.gradient(0.0, 0.0);
        assert_relative_eq!(g.dx, 1.0);
        assert_relative_eq!(g.dy, 0.0);

        let (x, y) = (0.7, -1.3);
        let g = FunctionId::Waves.gradient(x, y);
        assert_relative_eq!(g.dx, x.cos() * y.cos());
        assert_relative_eq!(g.dy, -x.sin() * y.sin());
    }

    #[test]
    fn parses_variant_and_display_names() {
        assert_eq!("Peak".parse(), Ok(FunctionId::Peak));
        assert_eq!(
            "Saddle (Hyperbolic Paraboloid)".parse(),
            Ok(FunctionId::Saddle)
        );
        assert_eq!("Waves (Sin/Cos)".parse(), Ok(FunctionId::Waves));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Ridge".parse::<FunctionId>().unwrap_err();
        assert_eq!(err.name, "Ridge");

        // A renamed or localized label must fail loudly, never fall back.
        assert!("waves".parse::<FunctionId>().is_err());
        assert!("".parse::<FunctionId>().is_err());
    }
}
