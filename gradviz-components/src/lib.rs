//! Components for evaluating two-variable surfaces and their gradients.
//!
//! The pieces mirror one interaction cycle of the visualizer: a
//! [`surface::Evaluator`] computes a surface height and its analytic partial
//! derivatives at a point, a [`gradient::Summarizer`] reduces those partials
//! to a steepest-ascent magnitude, and a [`sampler::Sampler`] produces the
//! mesh the renderer draws. [`scene::Scene`] composes all three into a single
//! call per user input.

pub mod gradient;
pub mod sampler;
pub mod scene;
pub mod surface;
