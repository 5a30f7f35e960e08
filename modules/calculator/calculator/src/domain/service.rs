//! Domain service for calculator
//!
//! Contains the core arithmetic. Overflow follows native `i32` semantics.

use tracing::{debug, warn};

use super::error::DomainError;
use crate::config::CalculatorConfig;

/// Domain service that performs integer arithmetic.
///
/// Stateless apart from its configuration, so a single instance can be
/// shared between threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn total(&self, a: i32, b: i32) -> i32 {
        self.trace("total", a, b);
        a + b
    }

    #[must_use]
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        self.trace("subtract", a, b);
        a - b
    }

    #[must_use]
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        self.trace("multiply", a, b);
        a * b
    }

    /// Divide `a` by `b`, truncating toward zero.
    ///
    /// # Errors
    /// Returns [`DomainError::DivisionByZero`] when `b` is zero.
    #[allow(clippy::integer_division)]
    pub fn divide(&self, a: i32, b: i32) -> Result<i32, DomainError> {
        self.trace("divide", a, b);
        if b == 0 {
            warn!(dividend = a, "rejected division by zero");
            return Err(DomainError::DivisionByZero { dividend: a });
        }
        Ok(a / b)
    }

    fn trace(&self, op: &'static str, a: i32, b: i32) {
        if self.config.trace_operations {
            debug!(op, a, b, "performing arithmetic operation");
        }
    }
}
