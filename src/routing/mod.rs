//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Population (at startup, before any dispatch):
//!     (path, handler name) pairs
//!     → table.rs register() — DuplicateRoute on collision
//!     → Freeze as immutable RouteTable
//!
//! Lookup (once, from the dispatcher):
//!     ParsedLink.path
//!     → table.rs lookup() — exact string match
//!     → Some(HandlerRef) or None
//! ```
//!
//! # Design Decisions
//! - Table populated at startup, immutable at runtime
//! - Exact, case-sensitive path match: no prefixes, no wildcards, no
//!   trailing-slash normalization
//! - Explicit None rather than silent default
//! - HandlerRef is an opaque Copy id; the host resolves it to a view

pub mod table;

pub use table::{HandlerRef, RouteError, RouteTable};
