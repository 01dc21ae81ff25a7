//! Runtime configuration.
//!
//! Layers, lowest to highest precedence:
//! - built-in defaults (reproduce the canonical demo output)
//! - environment variables prefixed with `RECKON_`, nested keys separated
//!   by a double underscore
//!
//! ```bash
//! RECKON_FLOAT_RENDERING=fixed reckon
//! RECKON_NEWTON__PRECISION=0.000001 RECKON_NEWTON__MAX_ITERATIONS=50 reckon
//! RECKON_LOGGING__DEFAULT=debug reckon
//! ```

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::report::FloatRendering;
use crate::sqrt::NewtonParams;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "RECKON_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub newton: NewtonParams,
    pub float_rendering: FloatRendering,
    pub logging: LoggingConfig,
}

/// Logging setup. `RUST_LOG` overrides `default` when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"warn"` or `"reckon=debug"`.
    pub default: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load defaults overlaid with `RECKON_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Extract and validate a configuration from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject Newton parameters that could never converge.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let precision = self.newton.precision;
        if !precision.is_finite() || precision <= 0.0 {
            return Err(ConfigError::InvalidPrecision(precision));
        }
        if self.newton.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
