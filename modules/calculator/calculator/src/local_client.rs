//! Local client implementing the `CalculatorApi` trait.

use std::sync::Arc;

use calculator_sdk::{CalculatorApi, CalculatorError};

use crate::domain::Service;

/// Local client for the calculator module.
///
/// Implements `CalculatorApi` by delegating to the domain service and
/// mapping domain errors into SDK errors.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorApi for CalculatorLocalClient {
    fn total(&self, a: i32, b: i32) -> i32 {
        self.service.total(a, b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        self.service.divide(a, b).map_err(CalculatorError::from)
    }
}
