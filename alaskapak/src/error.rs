//! Error types used by the crate.

use thiserror::Error;

/// AlaskaPak error type.
#[derive(Debug, Error, PartialEq)]
pub enum AlaskaPakError {
    /// A numeric input is outside of its valid domain.
    #[error("{name} must be within ({min}..{max}), got {value}")]
    Range {
        /// Name of the rejected input.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },
    /// A configuration value is not recognized.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Display template expansion failed.
    #[error("failed to expand template: {0}")]
    Template(String),
}

impl AlaskaPakError {
    pub(crate) fn out_of_range(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::Range {
            name,
            value,
            min,
            max,
        }
    }
}

impl From<strfmt::FmtError> for AlaskaPakError {
    fn from(value: strfmt::FmtError) -> Self {
        Self::Template(value.to_string())
    }
}
