//! Engine probe subsystem.
//!
//! # Data Flow
//! ```text
//! process-global diagnostic markers (captured by the host)
//!     → EngineMarkers snapshot (injected, never read ambiently)
//!     → probe.rs detect()
//!     → EngineLabel (Hermes | V8:version | JSC)
//!     → shown as a debug-build diagnostic only
//! ```
//!
//! # Design Decisions
//! - Pure query over an injected snapshot: testable without touching real
//!   process globals
//! - Heuristic, not proof: neither known marker present is read as JSC
//! - Unknown is reserved for a future engine that sets no known marker;
//!   nothing produces it today
//! - The label is advisory and never influences routing

pub mod probe;

pub use probe::{detect, EngineLabel, EngineMarkers, VersionAccessor};
