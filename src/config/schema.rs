//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files;
//! every field is defaulted so a missing or empty file yields a working
//! configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the deep-link router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Recognized deep-link scheme (without `://`).
    pub scheme: Scheme,

    /// Fallback view settings.
    pub fallback: FallbackConfig,

    /// Diagnostic display settings.
    pub diagnostics: DiagnosticsConfig,
}

/// Newtype wrapper so the scheme default lives in one place.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Scheme(pub String);

impl Default for Scheme {
    fn default() -> Self {
        Self("rnbench".to_string())
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fallback view settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Text shown by the fallback view.
    pub message: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            message: "View not found".to_string(),
        }
    }
}

/// Diagnostic display settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Show the engine label alongside the rendered view. Defaults to
    /// debug builds only, matching the host's dev-only diagnostic.
    pub show_engine_label: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            show_engine_label: cfg!(debug_assertions),
        }
    }
}
