use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub x_abs_tol: f64,
    pub x_rel_tol: f64,
    pub residual_tol: f64,
}

/// Errors that can occur when validating a bisection config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("residual_tol must be finite and non-negative")]
    Residual,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a config from a single relative tolerance.
    ///
    /// The search converges once `width <= tol * (|mid| + sqrt(tol))`, and
    /// only an exact hit on the target counts as residual convergence.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn from_tolerance(tol: f64) -> Result<Self, ConfigError> {
        let config = Self {
            max_iters: 2000,
            x_abs_tol: tol * tol.sqrt(),
            x_rel_tol: tol,
            residual_tol: 0.0,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first tolerance that is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !self.x_rel_tol.is_finite() || self.x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn from_tolerance_maps_to_absolute_and_relative() {
        let config = Config::from_tolerance(1e-8).expect("valid tolerance");
        assert_relative_eq!(config.x_rel_tol, 1e-8);
        assert_relative_eq!(config.x_abs_tol, 1e-12);
        assert_relative_eq!(config.residual_tol, 0.0);
    }

    #[test]
    fn from_tolerance_rejects_negative() {
        assert_eq!(Config::from_tolerance(-1e-8), Err(ConfigError::XAbs));
    }

    #[test]
    fn validate_reports_residual_tolerance() {
        let config = Config {
            residual_tol: f64::NAN,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Residual));
    }
}
