use gradviz_core::Component;
use thiserror::Error;

use crate::{
    gradient::{GradientSummary, Summarizer},
    sampler::{GridConfig, GridConfigError, Sampler, SurfaceGrid},
    surface::{EvaluateError, Evaluation, Evaluator, EvaluatorInput, FunctionId, Point2D},
};

/// A component that runs one full recomputation cycle.
///
/// Each user interaction supplies a fresh [`SceneInput`]; the scene evaluates
/// the surface at the point, summarizes the gradient, samples the mesh, and
/// returns everything the renderer needs in a [`SceneOutput`]. There is no
/// state carried between cycles, so concurrent inputs need nothing more than
/// processing one complete snapshot at a time.
pub struct Scene {
    sampler: Sampler,
}

/// One complete input snapshot from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneInput {
    pub function: FunctionId,
    pub point: Point2D,
}

/// Everything the rendering collaborator consumes for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOutput {
    pub evaluation: Evaluation,
    pub summary: GradientSummary,
    pub grid: SurfaceGrid,
}

/// Error returned when any stage of the cycle fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
    #[error(transparent)]
    Grid(#[from] GridConfigError),
}

impl Scene {
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            sampler: Sampler::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        self.sampler.config()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl Component for Scene {
    type Input = SceneInput;
    type Output = SceneOutput;
    type Error = SceneError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let SceneInput { function, point } = input;

        // Evaluate, then summarize the gradient while keeping the evaluation.
        let analysis = Evaluator.map_err(SceneError::from).chain(
            Summarizer
                .map(
                    |evaluation: &Evaluation| evaluation.gradient(),
                    |evaluation, summary| (evaluation, summary),
                )
                .map_err(|never| match never {}),
        );

        let (evaluation, summary) = analysis.call(EvaluatorInput { function, point })?;
        let grid = self.sampler.call(function)?;

        Ok(SceneOutput {
            evaluation,
            summary,
            grid,
        })
    }
}
