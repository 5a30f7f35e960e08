//! Error type for calculator operations.

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("division by zero: cannot divide {dividend} by 0")]
    DivisionByZero { dividend: i32 },
}

impl CalculatorError {
    #[must_use]
    pub fn division_by_zero(dividend: i32) -> Self {
        Self::DivisionByZero { dividend }
    }

    /// Returns `true` if this is a division by zero error.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}
