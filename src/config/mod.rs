//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize; missing file → defaults)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Every field has a default so no config file is required at all
//! - Config is immutable once loaded; there is no reload path (the
//!   router runs once at startup and never again)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DiagnosticsConfig, FallbackConfig, RouterConfig, Scheme};
