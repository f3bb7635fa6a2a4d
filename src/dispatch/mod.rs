//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! InitialUrlProvider (host) ──await once──▶ dispatcher.rs
//!     → scheme gate (recognized scheme only)
//!     → link::parse
//!     → routing::RouteTable::lookup
//!     → DispatchDecision (Matched | NotFound)
//!     → watch channel: Pending → Resolved(decision), exactly once
//!     → rendering surface maps the decision to a RenderInstruction
//! ```
//!
//! # Design Decisions
//! - One-shot: run() consumes the dispatcher, so a second dispatch is a
//!   compile error, not a runtime bug
//! - Every failure (missing URL, wrong scheme, parse failure, unknown
//!   path) normalizes to NotFound; nothing propagates as fatal
//! - The URL acquisition is the only suspension point; subscribers see
//!   Pending (render fallback/blank) until it resolves
//! - The provider is an injected capability, not ambient global state

pub mod decision;
pub mod dispatcher;

pub use decision::{DispatchDecision, DispatchError, DispatchState, RenderInstruction};
pub use dispatcher::{Dispatcher, InitialUrlProvider};
