use std::convert::Infallible;

use gradviz_core::Component;

/// Gradient magnitudes at or below this are treated as zero.
///
/// The catalog's critical points all have exactly zero partials, but Waves
/// can produce near-zero values at sampled points through rounding, so the
/// comparison allows a small slack rather than demanding exact zero.
pub const CRITICAL_TOLERANCE: f64 = 1e-9;

/// The gradient (∂f/∂x, ∂f/∂y) of a surface at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientVector {
    pub dx: f64,
    pub dy: f64,
}

impl GradientVector {
    /// The rate of steepest ascent, sqrt(dx² + dy²).
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// The unit steepest-ascent direction, or `None` at a critical point
    /// where no direction exists.
    #[must_use]
    pub fn direction(self) -> Option<[f64; 2]> {
        let magnitude = self.magnitude();
        (magnitude > CRITICAL_TOLERANCE).then(|| [self.dx / magnitude, self.dy / magnitude])
    }
}

/// A component that reduces a gradient to presentation-ready facts.
pub struct Summarizer;

/// The output of the [`Summarizer`] component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSummary {
    /// The rate of steepest ascent.
    pub magnitude: f64,
    /// Unit ascent direction, absent at a critical point.
    pub direction: Option<[f64; 2]>,
    /// Whether the point is (numerically) a critical point.
    pub is_critical: bool,
}

impl Component for Summarizer {
    type Input = GradientVector;
    type Output = GradientSummary;
    type Error = Infallible;

    fn call(&self, gradient: Self::Input) -> Result<Self::Output, Self::Error> {
        let magnitude = gradient.magnitude();

        Ok(GradientSummary {
            magnitude,
            direction: gradient.direction(),
            is_critical: magnitude <= CRITICAL_TOLERANCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::surface::FunctionId;

    use super::*;

    fn summarize(gradient: GradientVector) -> GradientSummary {
        Summarizer.call(gradient).unwrap()
    }

    #[test]
    fn magnitude_is_the_euclidean_norm() {
        let summary = summarize(GradientVector { dx: 3.0, dy: -4.0 });
        assert_relative_eq!(summary.magnitude, 5.0);
        assert!(!summary.is_critical);
    }

    #[test]
    fn zero_gradient_is_critical_with_no_direction() {
        let summary = summarize(GradientVector { dx: 0.0, dy: 0.0 });
        assert_relative_eq!(summary.magnitude, 0.0);
        assert!(summary.is_critical);
        assert_eq!(summary.direction, None);
    }

    #[test]
    fn near_zero_gradient_counts_as_critical() {
        let summary = summarize(GradientVector {
            dx: 1e-12,
            dy: -1e-12,
        });
        assert!(summary.is_critical);
        assert_eq!(summary.direction, None);
    }

    #[test]
    fn direction_is_a_unit_vector() {
        let summary = summarize(GradientVector { dx: 2.0, dy: -2.0 });
        let [ux, uy] = summary.direction.unwrap();
        assert_relative_eq!(ux.hypot(uy), 1.0);
        assert_relative_eq!(ux, 1.0 / 2.0_f64.sqrt());
        assert_relative_eq!(uy, -1.0 / 2.0_f64.sqrt());
    }

    #[test]
    fn peak_magnitude_matches_closed_form_everywhere() {
        // For Peak, |∇f| = 2·sqrt(x² + y²) exactly.
        for x in [-2.0, -0.7, 0.0, 1.3, 2.0] {
            for y in [-2.0, -0.1, 0.0, 0.9, 2.0] {
                let summary = summarize(FunctionId::Peak.gradient(x, y));
                assert_relative_eq!(summary.magnitude, 2.0 * x.hypot(y), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn critical_iff_zero_magnitude_across_the_catalog() {
        let samples = [-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0];

        for function in FunctionId::ALL {
            for x in samples {
                for y in samples {
                    let summary = summarize(function.gradient(x, y));
                    assert_eq!(summary.is_critical, summary.magnitude <= CRITICAL_TOLERANCE);
                    assert_eq!(summary.is_critical, summary.direction.is_none());
                }
            }
        }

        // Known critical points from the catalog.
        assert!(summarize(FunctionId::Peak.gradient(0.0, 0.0)).is_critical);
        assert!(summarize(FunctionId::Saddle.gradient(0.0, 0.0)).is_critical);
        assert!(!summarize(FunctionId::Waves.gradient(0.0, 0.0)).is_critical);
    }
}
