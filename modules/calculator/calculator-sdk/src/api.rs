//! Calculator API trait
//!
//! Contract trait for the calculator module.

use crate::error::CalculatorError;

/// Calculator API trait
///
/// Four binary operations over 32-bit signed integers. Addition, subtraction
/// and multiplication follow native `i32` arithmetic; only division can fail.
pub trait CalculatorApi: Send + Sync {
    /// Add two numbers and return the sum.
    fn total(&self, a: i32, b: i32) -> i32;

    /// Subtract `b` from `a`.
    fn subtract(&self, a: i32, b: i32) -> i32;

    /// Multiply two numbers and return the product.
    fn multiply(&self, a: i32, b: i32) -> i32;

    /// Divide `a` by `b`, truncating toward zero.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
    fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError>;
}
