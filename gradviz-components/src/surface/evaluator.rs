use gradviz_core::Component;
use thiserror::Error;

use crate::gradient::GradientVector;

use super::{FunctionId, Point2D};

/// A component that evaluates a catalog surface at a point.
///
/// For a [`FunctionId`] and a [`Point2D`] it produces the surface height and
/// the exact analytic partial derivatives there, together with the formula
/// label for display. Pure and deterministic: identical inputs yield
/// bit-identical outputs, and nothing is cached between calls.
pub struct Evaluator;

/// The input for the [`Evaluator`] component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorInput {
    pub function: FunctionId,
    pub point: Point2D,
}

/// The output of one surface evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Surface height z = f(x, y).
    pub z: f64,
    /// ∂f/∂x at the point.
    pub dz_dx: f64,
    /// ∂f/∂y at the point.
    pub dz_dy: f64,
    /// Static formula label for the evaluated function.
    pub formula: &'static str,
}

impl Evaluation {
    /// The gradient vector (∂f/∂x, ∂f/∂y) of this evaluation.
    #[must_use]
    pub fn gradient(&self) -> GradientVector {
        GradientVector {
            dx: self.dz_dx,
            dy: self.dz_dy,
        }
    }
}

/// Error returned for inputs outside the evaluator's domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluateError {
    /// The closed forms are defined over finite reals only.
    #[error("coordinate {axis} = {value} is not finite")]
    NonFiniteCoordinate { axis: char, value: f64 },
}

impl Component for Evaluator {
    type Input = EvaluatorInput;
    type Output = Evaluation;
    type Error = EvaluateError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let EvaluatorInput { function, point } = input;

        for (axis, value) in [('x', point.x), ('y', point.y)] {
            if !value.is_finite() {
                return Err(EvaluateError::NonFiniteCoordinate { axis, value });
            }
        }

        let GradientVector { dx, dy } = function.gradient(point.x, point.y);

        Ok(Evaluation {
            z: function.value(point.x, point.y),
            dz_dx: dx,
            dz_dy: dy,
            formula: function.formula(),
        })
    }
}
