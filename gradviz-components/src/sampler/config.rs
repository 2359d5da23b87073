use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for surface sampling.
///
/// The defaults reproduce the visualizer's reference behavior: a 50×50 mesh
/// over [-2.5, 2.5] on both axes. All fields are optional when deserialized,
/// so a partial configuration fills in from `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of samples along each axis, endpoints included.
    pub resolution: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: 50,
            x_min: -2.5,
            x_max: 2.5,
            y_min: -2.5,
            y_max: 2.5,
        }
    }
}

/// Error returned for configurations that cannot describe a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridConfigError {
    /// An axis needs at least its two endpoints.
    #[error("grid resolution must be at least 2, got {0}")]
    ResolutionTooSmall(usize),
    /// Bounds must be finite and strictly increasing.
    #[error("{axis} axis bounds are not a finite increasing range")]
    InvalidBounds { axis: char },
}

impl GridConfig {
    /// Checks that this configuration describes a valid mesh.
    ///
    /// # Errors
    ///
    /// Returns a [`GridConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.resolution < 2 {
            return Err(GridConfigError::ResolutionTooSmall(self.resolution));
        }

        for (axis, min, max) in [('x', self.x_min, self.x_max), ('y', self.y_min, self.y_max)] {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(GridConfigError::InvalidBounds { axis });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GridConfig::default().validate(), Ok(()));
    }

    #[test]
    fn reports_the_first_offending_field() {
        let config = GridConfig {
            resolution: 1,
            x_min: f64::NAN,
            ..GridConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GridConfigError::ResolutionTooSmall(1))
        );

        let config = GridConfig {
            x_min: f64::NAN,
            ..GridConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GridConfigError::InvalidBounds { axis: 'x' })
        );
    }

    #[test]
    fn zero_width_axes_are_invalid() {
        let config = GridConfig {
            y_min: 1.0,
            y_max: 1.0,
            ..GridConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GridConfigError::InvalidBounds { axis: 'y' })
        );
    }
}
