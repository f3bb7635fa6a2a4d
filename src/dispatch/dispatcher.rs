//! Single-shot startup dispatcher.
//!
//! # Responsibilities
//! - Await the host's initial URL exactly once (no retry, no cancellation)
//! - Gate on the recognized scheme before constructing a parsed link
//! - Resolve the path against the route table
//! - Publish the Pending → Resolved transition to the rendering surface

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::dispatch::decision::{DispatchDecision, DispatchError, DispatchState};
use crate::link;
use crate::routing::RouteTable;

/// Host capability that yields the startup URL, or `None` when the
/// process was not launched through a deep link.
///
/// Injected rather than read from ambient global state so tests can
/// substitute a fake. The dispatcher awaits it exactly once; the host
/// guarantees it eventually resolves, possibly after unbounded platform
/// startup plumbing.
pub trait InitialUrlProvider {
    fn initial_url(&self) -> impl Future<Output = Option<String>> + Send;
}

/// One-shot router from startup URL to dispatch decision.
///
/// [`Dispatcher::run`] consumes `self`: the decision is produced at most
/// once per process lifetime and the state machine cannot re-enter
/// `Pending`.
pub struct Dispatcher {
    table: Arc<RouteTable>,
    scheme: String,
    tx: watch::Sender<DispatchState>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiver the rendering surface watches.
    ///
    /// The receiver starts at [`DispatchState::Pending`] and observes a
    /// single transition to `Resolved`; subscribers that attach late still
    /// see the terminal state.
    pub fn new(table: Arc<RouteTable>, scheme: impl Into<String>) -> (Self, watch::Receiver<DispatchState>) {
        let (tx, rx) = watch::channel(DispatchState::Pending);
        (
            Self {
                table,
                scheme: scheme.into(),
                tx,
            },
            rx,
        )
    }

    /// Run the startup dispatch to completion.
    ///
    /// All failures are absorbed here: a missing, foreign-scheme,
    /// unparseable, or unrouted URL logs the reason and resolves to
    /// [`DispatchDecision::NotFound`]. This never returns an error and
    /// never panics on bad input.
    pub async fn run<P: InitialUrlProvider>(self, provider: &P) -> DispatchDecision {
        let decision = match self.decide(provider).await {
            Ok(decision) => decision,
            Err(reason) => {
                tracing::debug!(%reason, "deep link dispatch falling back");
                DispatchDecision::NotFound
            }
        };

        match &decision {
            DispatchDecision::Matched { handler, config } => {
                tracing::info!(
                    handler = ?self.table.handler_name(*handler),
                    config_keys = config.len(),
                    "deep link matched"
                );
            }
            DispatchDecision::NotFound => {
                tracing::info!("no deep link match, rendering fallback");
            }
        }

        // Send only fails when every receiver is gone, in which case the
        // decision still stands for the caller.
        let _ = self.tx.send(DispatchState::Resolved(decision.clone()));
        decision
    }

    async fn decide<P: InitialUrlProvider>(&self, provider: &P) -> Result<DispatchDecision, DispatchError> {
        let raw = provider
            .initial_url()
            .await
            .filter(|raw| !raw.is_empty())
            .ok_or(DispatchError::MissingUrl)?;

        // Scheme gate before parsing: a parsed link is only ever built
        // for the recognized scheme.
        let prefix = format!("{}://", self.scheme);
        if !raw.starts_with(&prefix) {
            let scheme = raw.split(':').next().unwrap_or_default().to_string();
            return Err(DispatchError::UnrecognizedScheme(scheme));
        }

        let parsed = link::parse(&raw)?;
        let handler = self
            .table
            .lookup(&parsed.path)
            .ok_or_else(|| DispatchError::RouteNotFound(parsed.path.clone()))?;

        Ok(DispatchDecision::Matched {
            handler,
            config: parsed.query,
        })
    }
}
