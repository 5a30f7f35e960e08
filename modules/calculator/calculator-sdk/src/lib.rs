//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator module:
//! - API trait (`CalculatorApi`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorApi;
//!
//! let client: Arc<dyn CalculatorApi> = calculator::CalculatorModule::init(config);
//! let sum = client.total(1, 2);
//! let quotient = client.divide(10, 2)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT ===
mod api;
pub use api::CalculatorApi;

// === ERRORS ===
pub mod error;
pub use error::CalculatorError;
