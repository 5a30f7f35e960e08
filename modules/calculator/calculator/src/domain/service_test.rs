#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::CalculatorConfig;

fn service() -> Service {
    Service::new(CalculatorConfig::default())
}

#[test]
fn test_total() {
    let service = service();
    for (a, b, expected) in [(0, 0, 0), (1, 2, 3), (-1, 2, 1), (-5, -7, -12)] {
        assert_eq!(service.total(a, b), expected, "total({a}, {b})");
    }
}

#[test]
fn test_subtract() {
    let service = service();
    for (a, b, expected) in [(5, 3, 2), (3, 5, -2), (-5, -7, 2), (-5, 7, -12)] {
        assert_eq!(service.subtract(a, b), expected, "subtract({a}, {b})");
    }
}

#[test]
fn test_multiply() {
    let service = service();
    for (a, b, expected) in [(0, 5, 0), (4, 6, 24), (-3, 7, -21), (-3, -7, 21)] {
        assert_eq!(service.multiply(a, b), expected, "multiply({a}, {b})");
    }
}

#[test]
fn test_divide() {
    let service = service();
    for (a, b, expected) in [(10, 2, 5), (9, 3, 3), (-12, 3, -4), (-12, -3, 4)] {
        assert_eq!(service.divide(a, b).unwrap(), expected, "divide({a}, {b})");
    }
}

#[test]
fn test_divide_truncates_toward_zero() {
    let service = service();
    assert_eq!(service.divide(7, 2).unwrap(), 3);
    assert_eq!(service.divide(-7, 2).unwrap(), -3);
    assert_eq!(service.divide(7, -2).unwrap(), -3);
}

#[test]
fn test_divide_by_zero() {
    let service = service();
    assert_eq!(
        service.divide(1, 0),
        Err(DomainError::DivisionByZero { dividend: 1 })
    );
}

#[test]
fn test_domain_error_maps_to_sdk_error() {
    let err: calculator_sdk::CalculatorError = DomainError::DivisionByZero { dividend: -4 }.into();
    assert_eq!(err, calculator_sdk::CalculatorError::division_by_zero(-4));
}

#[test]
#[tracing_test::traced_test]
fn test_operations_are_traced_when_enabled() {
    let service = service();
    assert_eq!(service.multiply(4, 6), 24);
    assert!(logs_contain("performing arithmetic operation"));
    assert!(logs_contain("op=\"multiply\""));
}

#[test]
#[tracing_test::traced_test]
fn test_operations_are_silent_when_tracing_disabled() {
    let service = Service::new(CalculatorConfig {
        trace_operations: false,
    });
    assert_eq!(service.total(1, 2), 3);
    assert!(!logs_contain("performing arithmetic operation"));
}

#[test]
#[tracing_test::traced_test]
fn test_division_by_zero_is_logged() {
    let service = service();
    assert!(service.divide(5, 0).is_err());
    assert!(logs_contain("rejected division by zero"));
    assert!(logs_contain("dividend=5"));
}
