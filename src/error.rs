//! Error types for `BigInt` arithmetic and parsing

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// A limb left `[0, RADIX)` or a product grew past `MAX_DIGITS` digits.
    #[error("BigInt overflow")]
    Overflow,

    /// `/` or `%` by a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// The literal does not match `[+-]?[0-9]+`.
    #[error("Invalid BigInt literal {literal:?}: {reason}")]
    InvalidFormat { literal: String, reason: &'static str },
}

impl BigIntError {
    pub(crate) fn invalid_format(literal: &str, reason: &'static str) -> Self {
        BigIntError::InvalidFormat { literal: literal.to_string(), reason }
    }
}

pub type Result<T> = std::result::Result<T, BigIntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(BigIntError::Overflow.to_string(), "BigInt overflow");
        assert_eq!(BigIntError::DivisionByZero.to_string(), "Division by zero");

        let err = BigIntError::invalid_format("12a", "unexpected character");
        assert_eq!(err.to_string(), "Invalid BigInt literal \"12a\": unexpected character");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(BigIntError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }
}
