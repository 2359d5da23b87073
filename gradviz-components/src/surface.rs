mod evaluator;
mod function;
mod point;

pub use evaluator::{EvaluateError, Evaluation, Evaluator, EvaluatorInput};
pub use function::{FunctionId, UnknownFunctionError};
pub use point::Point2D;
