//! Error types for frequency parsing.

use thiserror::Error;

/// Errors returned when a string cannot be read as a frequency.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not have the `[sign]mantissa unit` shape, or the mantissa
    /// is not a number. Carries the whole input.
    #[error("invalid frequency: {0:?}")]
    InvalidFrequency(String),

    /// Input has the right shape but the unit is not one of
    /// Hz, KHz, MHz, GHz or THz. Carries the unit text.
    #[error("unknown unit: {0:?}")]
    UnknownUnit(String),
}

impl ParseError {
    /// Returns true if the error was caused by the unit suffix.
    pub fn is_unknown_unit(&self) -> bool {
        matches!(self, ParseError::UnknownUnit(_))
    }
}
