use std::fmt;

use crate::types::NumericType;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while evaluating the arithmetic functions.
///
/// The arithmetic variants display their message verbatim.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    DivisionByZero(String),
    #[error("{0}")]
    Domain(String),
    #[error("{0}")]
    Range(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Execution error: {0}")]
    Execution(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn floordiv_by_zero() -> Self {
        Error::DivisionByZero("division by zero".to_string())
    }

    pub fn floormod_by_zero() -> Self {
        Error::DivisionByZero("Cannot divide by 0".to_string())
    }

    pub fn negative_integer_power() -> Self {
        Error::Domain("Integers to negative integer powers are not allowed".to_string())
    }

    /// `value` is the real-valued result that did not fit into `target`.
    pub fn out_of_range(value: impl fmt::Display, target: NumericType) -> Self {
        Error::Range(format!(
            "{} is outside the range of representable values of type {}",
            value, target
        ))
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    pub fn execution(msg: impl Into<String>) -> Self {
        Error::Execution(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Error::DivisionByZero(_) | Error::Domain(_) | Error::Range(_)
        )
    }
}
