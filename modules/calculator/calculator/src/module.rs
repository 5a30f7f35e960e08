//! Calculator Module definition
//!
//! Wires configuration, domain service and local client together and hands
//! out the `CalculatorApi` trait object consumers use.

use std::path::Path;
use std::sync::Arc;

use calculator_sdk::CalculatorApi;

use crate::config::{CalculatorConfig, ConfigError};
use crate::domain::Service;
use crate::local_client::CalculatorLocalClient;

/// Calculator module.
pub struct CalculatorModule;

impl CalculatorModule {
    /// Build the calculator client from an already loaded configuration.
    #[must_use]
    pub fn init(config: CalculatorConfig) -> Arc<dyn CalculatorApi> {
        tracing::info!(
            trace_operations = config.trace_operations,
            "Initializing calculator module"
        );

        let service = Arc::new(Service::new(config));
        let client: Arc<dyn CalculatorApi> = Arc::new(CalculatorLocalClient::new(service));

        tracing::info!("calculator module initialized");
        client
    }

    /// Load configuration (see [`CalculatorConfig::load`]) and build the client.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration cannot be loaded.
    pub fn from_config_file(path: Option<&Path>) -> Result<Arc<dyn CalculatorApi>, ConfigError> {
        let config = CalculatorConfig::load(path)?;
        Ok(Self::init(config))
    }
}
