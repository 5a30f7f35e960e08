//! Calculator Module
//!
//! Integer arithmetic (add, subtract, multiply, divide) exposed through the
//! `CalculatorApi` trait from `calculator-sdk`.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic
//! - `local_client.rs` - `CalculatorApi` implementation over the domain service
//! - `config.rs` - Module configuration
//! - `module.rs` - Module wiring
//!
//! External consumers should depend on `calculator-sdk` and hold an
//! `Arc<dyn CalculatorApi>` obtained from [`CalculatorModule::init`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use calculator_sdk::{CalculatorApi, CalculatorError};

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

pub mod local_client;
pub use local_client::CalculatorLocalClient;

pub mod config;
pub use config::{CalculatorConfig, ConfigError};

#[doc(hidden)]
pub mod domain;
