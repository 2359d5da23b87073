use ndarray::{Array1, Array2};

use crate::surface::FunctionId;

use super::GridConfig;

/// Evenly spaced samples from `min` to `max` inclusive.
///
/// The final sample is pinned to `max` so the configured bounds are hit
/// exactly despite rounding in the step.
fn axis(min: f64, max: f64, resolution: usize) -> Array1<f64> {
    let step = (max - min) / (resolution - 1) as f64;
    Array1::from_shape_fn(resolution, |i| {
        if i == resolution - 1 {
            max
        } else {
            min + step * i as f64
        }
    })
}

/// A sampled surface: coordinate meshes and heights over a rectangular domain.
///
/// Follows the meshgrid convention: `x` varies along columns, `y` along rows,
/// and `z[[i, j]]` is the surface height at `(x[[i, j]], y[[i, j]])`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub z: Array2<f64>,
}

impl SurfaceGrid {
    /// Samples `function` over the domain described by `config`.
    ///
    /// The caller validates `config` first; a valid configuration always
    /// produces a finite mesh.
    pub(crate) fn build(function: FunctionId, config: &GridConfig) -> Self {
        let n = config.resolution;
        let xs = axis(config.x_min, config.x_max, n);
        let ys = axis(config.y_min, config.y_max, n);

        Self {
            x: Array2::from_shape_fn((n, n), |(_, j)| xs[j]),
            y: Array2::from_shape_fn((n, n), |(i, _)| ys[i]),
            z: Array2::from_shape_fn((n, n), |(i, j)| function.value(xs[j], ys[i])),
        }
    }

    /// Number of samples along each axis.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.z.nrows()
    }

    /// The sampled x domain as `(min, max)`.
    #[must_use]
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.x[[0, 0]], self.x[[0, self.x.ncols() - 1]])
    }

    /// The sampled y domain as `(min, max)`.
    #[must_use]
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y[[0, 0]], self.y[[self.y.nrows() - 1, 0]])
    }

    /// The smallest and largest sampled heights as `(min, max)`.
    #[must_use]
    pub fn z_bounds(&self) -> (f64, f64) {
        self.z
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &z| {
                (min.min(z), max.max(z))
            })
    }
}
