//! Deep-link router for a benchmarking host application.
//!
//! # Architecture Overview
//!
//! ```text
//!   host startup URL (maybe absent)
//!        │
//!        ▼
//!   ┌──────────┐   raw string   ┌────────┐   ParsedLink   ┌─────────┐
//!   │ dispatch │ ─────────────▶ │  link  │ ─────────────▶ │ routing │
//!   │ (1-shot) │                │ parser │                │  table  │
//!   └────┬─────┘                └────────┘                └────┬────┘
//!        │                                                     │
//!        ▼                                                     ▼
//!   watch channel: Pending ──▶ Resolved(Matched | NotFound)
//!        │
//!        ▼
//!   rendering surface (host): view instruction or fallback
//!
//!   engine probe: advisory label only, never consulted by routing
//! ```
//!
//! The router runs exactly once per process lifetime, at startup. Every
//! failure along the way (missing URL, wrong scheme, unparseable URL,
//! unregistered path) collapses into the same `NotFound` outcome; a bad
//! deep link is an expected condition for a benchmarking harness, not an
//! error.

// Core subsystems
pub mod dispatch;
pub mod engine;
pub mod link;
pub mod routing;

// Cross-cutting concerns
pub mod config;

pub use config::RouterConfig;
pub use dispatch::{DispatchDecision, Dispatcher, InitialUrlProvider, RenderInstruction};
pub use engine::{EngineLabel, EngineMarkers};
pub use link::ParsedLink;
pub use routing::{HandlerRef, RouteTable};
