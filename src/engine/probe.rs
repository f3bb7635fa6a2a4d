//! Script-engine classification.
//!
//! # Responsibilities
//! - Classify an EngineMarkers snapshot into a closed label set
//! - Carry the V8 version string when the accessor marker is present

use std::fmt;
use std::sync::Arc;

/// Callable runtime-version accessor, as captured from the host.
pub type VersionAccessor = Arc<dyn Fn() -> String + Send + Sync>;

/// Snapshot of the process-global diagnostic markers the probe inspects.
///
/// The host captures these once; the probe never reads ambient state
/// itself.
#[derive(Clone, Default)]
pub struct EngineMarkers {
    /// The bytecode-interpreter engine's internal marker object exists.
    pub hermes_internal: bool,

    /// A callable accessor for the runtime version, when exposed.
    pub v8_runtime: Option<VersionAccessor>,
}

impl fmt::Debug for EngineMarkers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineMarkers")
            .field("hermes_internal", &self.hermes_internal)
            .field("v8_runtime", &self.v8_runtime.is_some())
            .finish()
    }
}

/// Diagnostic classification of the host's script engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineLabel {
    Hermes,
    V8(String),
    Jsc,
    /// Reserved for an engine that sets none of the known markers; the
    /// current heuristic never returns it.
    Unknown,
}

impl fmt::Display for EngineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineLabel::Hermes => write!(f, "Hermes"),
            EngineLabel::V8(version) => write!(f, "V8:{}", version),
            EngineLabel::Jsc => write!(f, "JSC"),
            EngineLabel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Classify the engine from a marker snapshot.
///
/// Checks the markers in order: Hermes marker, then V8 version accessor,
/// else JSC. Absence of the first two is treated as proof of JSC; this
/// mirrors the host's historical behavior. Pure, idempotent, cheap —
/// callers re-probe on demand instead of caching.
pub fn detect(markers: &EngineMarkers) -> EngineLabel {
    if markers.hermes_internal {
        EngineLabel::Hermes
    } else if let Some(version) = &markers.v8_runtime {
        EngineLabel::V8(version())
    } else {
        EngineLabel::Jsc
    }
}
