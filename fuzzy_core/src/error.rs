//! Errors raised while building or querying a fuzzy module

use thiserror::Error;

/// Fuzzy engine error
///
/// Every variant signals a mismatched rule base or a caller bug. Inputs that
/// fire no rule are not an error: defuzzification then returns 0.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    #[error("Fuzzy variable '{0}' is already defined")]
    DuplicateVariableName(String),
    #[error("Fuzzy set '{set}' is already defined on variable '{variable}'")]
    DuplicateSetName { variable: String, set: String },
    #[error("Unknown fuzzy variable '{0}'")]
    UnknownVariable(String),
    #[error("Unknown fuzzy set '{set}' on variable '{variable}'")]
    UnknownSet { variable: String, set: String },
    #[error("Fuzzy set '{set}' has invalid control points ({a}, {b}, {c}): expected finite a <= b <= c")]
    InvalidShape { set: String, a: f64, b: f64, c: f64 },
    #[error("Rule antecedent references no fuzzy set")]
    EmptyAntecedent,
    #[error("Fuzzy set handle {0} does not belong to this module")]
    InvalidHandle(String),
    #[error("Crisp input {value} for fuzzy variable '{variable}' is not a finite number")]
    InvalidInput { variable: String, value: f64 },
}

/// Result alias for fuzzy engine operations
pub type FuzzyResult<T> = Result<T, FuzzyError>;
