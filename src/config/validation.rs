//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject schemes that cannot appear in a URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("scheme must not be empty")]
    EmptyScheme,

    /// RFC 3986: scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    #[error("invalid scheme {0:?}")]
    InvalidScheme(String),

    #[error("fallback message must not be empty")]
    EmptyFallbackMessage,
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let scheme = config.scheme.as_ref();
    if scheme.is_empty() {
        errors.push(ValidationError::EmptyScheme);
    } else if !scheme_is_valid(scheme) {
        errors.push(ValidationError::InvalidScheme(scheme.to_string()));
    }

    if config.fallback.message.is_empty() {
        errors.push(ValidationError::EmptyFallbackMessage);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn scheme_is_valid(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Scheme;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RouterConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_scheme_rejected() {
        let mut config = RouterConfig::default();
        config.scheme = Scheme(String::new());
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::EmptyScheme));
    }

    #[test]
    fn test_scheme_with_separator_rejected() {
        let mut config = RouterConfig::default();
        config.scheme = Scheme("rn bench://".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = RouterConfig::default();
        config.scheme = Scheme(String::new());
        config.fallback.message = String::new();
        assert_eq!(validate_config(&config).unwrap_err().len(), 2);
    }
}
