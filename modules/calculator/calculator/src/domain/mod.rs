//! Domain layer for calculator module
//!
//! Contains the arithmetic and its domain errors.

pub mod error;
pub mod service;

pub use error::DomainError;
pub use service::Service;

#[cfg(test)]
mod service_test;
