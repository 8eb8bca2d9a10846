//! Error types for mixture operations.

use lm_config::ConfigError;
use lm_core::error::LmError;
use lm_liquids::LiquidError;
use thiserror::Error;

/// Errors that can occur while building or querying a liquid mixture.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixtureError {
    /// Mixture description could not be resolved to component models.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// Composition vector length differs from the number of components.
    #[error("Dimension mismatch for {what}: expected {expected} entries, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Boiling-point inversion could not bracket or converge.
    #[error("Convergence failed: {what}")]
    Convergence { what: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type MixtureResult<T> = Result<T, MixtureError>;

impl From<LmError> for MixtureError {
    fn from(e: LmError) -> Self {
        match e {
            LmError::DimensionMismatch {
                what,
                expected,
                found,
            } => MixtureError::DimensionMismatch {
                what,
                expected,
                found,
            },
            LmError::NonFinite { what, value } => MixtureError::NonFinite { what, value },
            LmError::InvalidArg { what } => MixtureError::Configuration {
                what: what.to_string(),
            },
        }
    }
}

impl From<LiquidError> for MixtureError {
    fn from(e: LiquidError) -> Self {
        MixtureError::Configuration {
            what: e.to_string(),
        }
    }
}

impl From<ConfigError> for MixtureError {
    fn from(e: ConfigError) -> Self {
        MixtureError::Configuration {
            what: e.to_string(),
        }
    }
}
