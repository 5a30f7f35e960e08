//! Configuration for the calculator module.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `CALCULATOR_TRACE_OPERATIONS=false`.
pub const ENV_PREFIX: &str = "CALCULATOR_";

/// Configuration for the `calculator` module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Emit a `debug` event with the operands of every operation.
    pub trace_operations: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            trace_operations: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid calculator config: {0}")]
    Invalid(#[source] Box<figment::Error>),
}

impl CalculatorConfig {
    /// Load configuration from defaults, an optional YAML file and
    /// `CALCULATOR_*` environment variables, in increasing precedence.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotFound`] if `path` is given but does not exist,
    /// or [`ConfigError::Invalid`] if the merged configuration fails to
    /// deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&["trace_operations"]));

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))?;
        tracing::debug!(
            trace_operations = config.trace_operations,
            "calculator config loaded"
        );
        Ok(config)
    }
}
