//! Mixture description validation.

use crate::schema::{ComponentDef, MixtureDef};
use lm_liquids::LiquidError;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Mixture has no components")]
    Empty,

    #[error("Empty component identifier")]
    EmptyId,

    #[error("Component {id}: default_coeffs is false but no coeffs block is given")]
    MissingCoeffs { id: String },

    #[error("Component {id}: coeffs block is given but default_coeffs is true")]
    ConflictingCoeffs { id: String },

    #[error("Component {id}: {source}")]
    InvalidCoeffs {
        id: String,
        #[source]
        source: LiquidError,
    },
}

pub fn validate_mixture(mixture: &MixtureDef) -> Result<(), ValidationError> {
    if mixture.is_empty() {
        return Err(ValidationError::Empty);
    }

    for (id, component) in mixture.iter() {
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        validate_component(id, &component)?;
    }

    Ok(())
}

fn validate_component(id: &str, component: &ComponentDef) -> Result<(), ValidationError> {
    match (&component.coeffs, component.default_coeffs) {
        (None, false) => Err(ValidationError::MissingCoeffs { id: id.to_string() }),
        (Some(_), true) => Err(ValidationError::ConflictingCoeffs { id: id.to_string() }),
        (Some(coeffs), false) => coeffs
            .validate()
            .map_err(|source| ValidationError::InvalidCoeffs {
                id: id.to_string(),
                source,
            }),
        (None, true) => Ok(()),
    }
}
