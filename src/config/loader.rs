//! Configuration loading from disk.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: the router is expected to run with
/// defaults when the host ships no config.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            RouterConfig::default()
        }
        Err(err) => return Err(err.into()),
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
