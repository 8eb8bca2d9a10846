//! Liquid property errors.

use lm_core::LmError;
use thiserror::Error;

/// Result type for liquid operations.
pub type LiquidResult<T> = Result<T, LiquidError>;

/// Errors that can occur while building pure-component liquid models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiquidError {
    /// Identifier not present in the coefficient database.
    #[error("Unknown liquid: {id}")]
    UnknownLiquid { id: String },

    /// Coefficient set rejected by validation.
    #[error("Invalid coefficients for {what}")]
    InvalidCoeffs { what: &'static str },
}

impl From<LiquidError> for LmError {
    fn from(err: LiquidError) -> Self {
        match err {
            LiquidError::UnknownLiquid { .. } => LmError::InvalidArg {
                what: "unknown liquid",
            },
            LiquidError::InvalidCoeffs { what } => LmError::InvalidArg { what },
        }
    }
}
