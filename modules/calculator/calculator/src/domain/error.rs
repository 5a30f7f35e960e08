use calculator_sdk::CalculatorError;

/// Domain-level errors for the calculator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i32 },
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DivisionByZero { dividend } => Self::division_by_zero(dividend),
        }
    }
}
