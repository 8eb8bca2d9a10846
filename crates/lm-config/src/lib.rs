//! lm-config: mixture description format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_mixture};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_yaml(content: &str) -> ConfigResult<MixtureDef> {
    let mixture: MixtureDef = serde_yaml::from_str(content)?;
    validate_mixture(&mixture)?;
    Ok(mixture)
}

pub fn load_yaml(path: &std::path::Path) -> ConfigResult<MixtureDef> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &std::path::Path, mixture: &MixtureDef) -> ConfigResult<()> {
    validate_mixture(mixture)?;
    let content = serde_yaml::to_string(mixture)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn parse_json(content: &str) -> ConfigResult<MixtureDef> {
    let mixture: MixtureDef = serde_json::from_str(content)?;
    validate_mixture(&mixture)?;
    Ok(mixture)
}

pub fn load_json(path: &std::path::Path) -> ConfigResult<MixtureDef> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

/// Load a mixture description, choosing the format from the file extension.
pub fn load(path: &std::path::Path) -> ConfigResult<MixtureDef> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
