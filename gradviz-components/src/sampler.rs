mod config;
mod grid;

use std::convert::Infallible;

use gradviz_core::Component;

use crate::surface::FunctionId;

pub use config::{GridConfig, GridConfigError};
pub use grid::SurfaceGrid;

/// A component that samples a catalog surface over a rectangular domain.
///
/// For a [`FunctionId`] it produces a [`SurfaceGrid`]: evenly spaced
/// coordinate meshes spanning the configured domain and the surface height at
/// every mesh cell. The coordinate meshes depend only on the configuration,
/// never on the function, so switching functions changes Z alone and the
/// renderer can keep its axes.
pub struct Sampler {
    config: GridConfig,
}

impl Sampler {
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Converts this sampler into one with all grids precomputed.
    ///
    /// # Errors
    ///
    /// Returns a [`GridConfigError`] if the configuration is invalid.
    pub fn cached(self) -> Result<CachedSampler, GridConfigError> {
        CachedSampler::new(self.config)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl Component for Sampler {
    type Input = FunctionId;
    type Output = SurfaceGrid;
    type Error = GridConfigError;

    fn call(&self, function: Self::Input) -> Result<Self::Output, Self::Error> {
        self.config.validate()?;
        Ok(SurfaceGrid::build(function, &self.config))
    }
}

/// A [`Sampler`] with the grid for every catalog entry precomputed.
///
/// The catalog is a closed three-element set and a grid is a few thousand
/// cells, so rather than memoizing lazily this samples all entries up front
/// and serves clones. Repeated calls for the same function return
/// bit-identical grids.
#[derive(Debug)]
pub struct CachedSampler {
    grids: [SurfaceGrid; 3],
}

impl CachedSampler {
    /// Samples every catalog entry with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`GridConfigError`] if the configuration is invalid.
    pub fn new(config: GridConfig) -> Result<Self, GridConfigError> {
        config.validate()?;
        Ok(Self {
            grids: FunctionId::ALL.map(|function| SurfaceGrid::build(function, &config)),
        })
    }
}

impl Component for CachedSampler {
    type Input = FunctionId;
    type Output = SurfaceGrid;
    type Error = Infallible;

    fn call(&self, function: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.grids[function as usize].clone())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn axes_are_evenly_spaced_and_inclusive() {
        let grid = Sampler::default().call(FunctionId::Peak).unwrap();
        let n = grid.resolution();
        assert_eq!(n, 50);

        assert_relative_eq!(grid.x[[0, 0]], -2.5);
        assert_relative_eq!(grid.x[[0, n - 1]], 2.5);
        assert_relative_eq!(grid.y[[0, 0]], -2.5);
        assert_relative_eq!(grid.y[[n - 1, 0]], 2.5);

        let step = 5.0 / (n - 1) as f64;
        assert_relative_eq!(grid.x[[0, 1]] - grid.x[[0, 0]], step, epsilon = 1e-12);
        assert_relative_eq!(grid.y[[1, 0]] - grid.y[[0, 0]], step, epsilon = 1e-12);
    }

    #[test]
    fn meshes_follow_the_meshgrid_convention() {
        let config = GridConfig {
            resolution: 3,
            x_min: 0.0,
            x_max: 2.0,
            y_min: -1.0,
            y_max: 1.0,
        };
        let grid = Sampler::new(config).call(FunctionId::Saddle).unwrap();

        // x varies along columns, y along rows.
        assert_relative_eq!(grid.x[[0, 1]], 1.0);
        assert_relative_eq!(grid.x[[2, 1]], 1.0);
        assert_relative_eq!(grid.y[[1, 0]], 0.0);
        assert_relative_eq!(grid.y[[1, 2]], 0.0);

        // z[i][j] = f(x[j], y[i]) for the saddle: x² - y².
        assert_relative_eq!(grid.z[[0, 2]], 4.0 - 1.0);
        assert_relative_eq!(grid.z[[1, 0]], 0.0);
    }

    #[test]
    fn coordinate_meshes_are_function_independent() {
        let sampler = Sampler::default();
        let peak = sampler.call(FunctionId::Peak).unwrap();
        let saddle = sampler.call(FunctionId::Saddle).unwrap();
        let waves = sampler.call(FunctionId::Waves).unwrap();

        assert_eq!(peak.x, saddle.x);
        assert_eq!(peak.x, waves.x);
        assert_eq!(peak.y, saddle.y);
        assert_eq!(peak.y, waves.y);

        // Only the heights differ.
        assert_ne!(peak.z, saddle.z);
    }

    #[test]
    fn z_matches_the_evaluator_closed_forms() {
        let grid = Sampler::default().call(FunctionId::Waves).unwrap();
        let n = grid.resolution();

        for &(i, j) in &[(0, 0), (7, 31), (n - 1, n - 1)] {
            let (x, y) = (grid.x[[i, j]], grid.y[[i, j]]);
            assert_relative_eq!(grid.z[[i, j]], FunctionId::Waves.value(x, y));
        }
    }

    #[test]
    fn rejects_invalid_configurations() {
        let too_coarse = GridConfig {
            resolution: 1,
            ..GridConfig::default()
        };
        assert_eq!(
            Sampler::new(too_coarse).call(FunctionId::Peak),
            Err(GridConfigError::ResolutionTooSmall(1))
        );

        let inverted = GridConfig {
            x_min: 2.5,
            x_max: -2.5,
            ..GridConfig::default()
        };
        assert!(matches!(
            Sampler::new(inverted).call(FunctionId::Peak),
            Err(GridConfigError::InvalidBounds { axis: 'x', .. })
        ));

        let non_finite = GridConfig {
            y_max: f64::INFINITY,
            ..GridConfig::default()
        };
        assert!(matches!(
            Sampler::new(non_finite).call(FunctionId::Peak),
            Err(GridConfigError::InvalidBounds { axis: 'y', .. })
        ));
    }

    #[test]
    fn cached_sampler_serves_bit_identical_grids() {
        let cached = Sampler::default().cached().unwrap();

        let first = cached.call(FunctionId::Waves).unwrap();
        let second = cached.call(FunctionId::Waves).unwrap();
        assert_eq!(first, second);

        let direct = Sampler::default().call(FunctionId::Waves).unwrap();
        assert_eq!(first, direct);
    }

    #[test]
    fn cached_sampler_rejects_invalid_configurations() {
        let bad = GridConfig {
            resolution: 0,
            ..GridConfig::default()
        };
        assert_eq!(
            CachedSampler::new(bad).unwrap_err(),
            GridConfigError::ResolutionTooSmall(0)
        );
    }
}
