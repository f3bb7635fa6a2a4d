//! Dispatch outcome types and the internal failure taxonomy.

use std::collections::HashMap;

use thiserror::Error;

use crate::link::ParseFailure;
use crate::routing::HandlerRef;

/// The outcome of the single startup dispatch.
///
/// Immutable once produced; produced at most once per process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchDecision {
    /// The path matched a registered route. `config` is the URL's decoded
    /// query map, handed to the handler as-is (all strings, no coercion).
    Matched {
        handler: HandlerRef,
        config: HashMap<String, String>,
    },

    /// No usable deep link: render the fallback view.
    NotFound,
}

impl DispatchDecision {
    /// Map the decision to an instruction for the rendering surface.
    pub fn render_instruction(&self, fallback_message: &str) -> RenderInstruction {
        match self {
            DispatchDecision::Matched { handler, config } => RenderInstruction::View {
                handler: *handler,
                config: config.clone(),
            },
            DispatchDecision::NotFound => RenderInstruction::Fallback {
                message: fallback_message.to_string(),
            },
        }
    }
}

/// Dispatcher lifecycle, published through the watch channel.
///
/// Transitions `Pending -> Resolved` exactly once and never back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchState {
    /// Acquisition in flight; the surface renders fallback/blank.
    Pending,
    /// Terminal.
    Resolved(DispatchDecision),
}

/// What the rendering collaborator is asked to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Construct the view behind `handler` with `config` as input.
    View {
        handler: HandlerRef,
        config: HashMap<String, String>,
    },
    /// Construct the fallback view.
    Fallback { message: String },
}

/// Reasons a dispatch falls back.
///
/// None of these escape the dispatcher: all four are absorbed and
/// normalized to [`DispatchDecision::NotFound`]. The enum exists so the
/// fallback reason can be logged with structure.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The host supplied no startup URL.
    #[error("no startup URL supplied")]
    MissingUrl,

    /// URL present but its scheme is not the recognized one.
    #[error("unrecognized scheme: {0}")]
    UnrecognizedScheme(String),

    /// URL malformed beyond repair.
    #[error(transparent)]
    Parse(#[from] ParseFailure),

    /// Path parsed but no handler is registered for it.
    #[error("no route registered for path: {0}")]
    RouteNotFound(String),
}
