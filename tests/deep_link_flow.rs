//! End-to-end dispatch scenarios driven through the public API.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use benchlink::dispatch::{
    DispatchDecision, DispatchState, Dispatcher, InitialUrlProvider, RenderInstruction,
};
use benchlink::routing::RouteTable;
use benchlink::RouterConfig;

/// Provider that resolves immediately with a fixed answer.
struct FixedProvider(Option<String>);

impl InitialUrlProvider for FixedProvider {
    async fn initial_url(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Provider that simulates slow platform startup plumbing.
struct SlowProvider {
    delay: Duration,
    url: Option<String>,
}

impl InitialUrlProvider for SlowProvider {
    async fn initial_url(&self) -> Option<String> {
        tokio::time::sleep(self.delay).await;
        self.url.clone()
    }
}

fn new_dispatcher() -> (Dispatcher, tokio::sync::watch::Receiver<DispatchState>) {
    let config = RouterConfig::default();
    Dispatcher::new(Arc::new(RouteTable::with_defaults()), config.scheme.as_ref())
}

#[tokio::test]
async fn test_every_registered_path_dispatches_to_its_handler() {
    let table = Arc::new(RouteTable::with_defaults());
    let paths: Vec<String> = table.iter().map(|(p, _)| p.to_string()).collect();
    assert!(!paths.is_empty());

    for path in paths {
        let expected = table.lookup(&path).unwrap();
        let (dispatcher, _rx) = Dispatcher::new(table.clone(), "rnbench");
        let provider = FixedProvider(Some(format!("rnbench://x{path}?k=v")));

        let decision = dispatcher.run(&provider).await;
        assert_eq!(
            decision,
            DispatchDecision::Matched {
                handler: expected,
                config: HashMap::from([("k".to_string(), "v".to_string())]),
            },
            "path {path} should route to its registered handler"
        );
    }
}

#[tokio::test]
async fn test_tti_end_to_end_with_config() {
    let (dispatcher, _rx) = new_dispatcher();
    let provider = FixedProvider(Some(
        "rnbench://host/TTI?threshold=100&label=cold".to_string(),
    ));

    let decision = dispatcher.run(&provider).await;
    let DispatchDecision::Matched { handler, config } = &decision else {
        panic!("expected /TTI to match, got {decision:?}");
    };
    assert_eq!(
        RouteTable::with_defaults().lookup("/TTI"),
        Some(*handler)
    );
    assert_eq!(config.get("threshold").map(String::as_str), Some("100"));
    assert_eq!(config.get("label").map(String::as_str), Some("cold"));
}

#[tokio::test]
async fn test_unknown_path_renders_fallback_text() {
    let router_config = RouterConfig::default();
    let (dispatcher, _rx) = new_dispatcher();
    let provider = FixedProvider(Some("rnbench://host/Unknown".to_string()));

    let decision = dispatcher.run(&provider).await;
    assert_eq!(decision, DispatchDecision::NotFound);

    let instruction = decision.render_instruction(&router_config.fallback.message);
    assert_eq!(
        instruction,
        RenderInstruction::Fallback {
            message: "View not found".to_string(),
        }
    );
}

#[tokio::test]
async fn test_surface_sees_pending_during_acquisition_then_terminal_state() {
    let (dispatcher, mut rx) = new_dispatcher();
    let provider = SlowProvider {
        delay: Duration::from_millis(50),
        url: Some("rnbench://host/TTI".to_string()),
    };

    let run = tokio::spawn(async move { dispatcher.run(&provider).await });

    // While the acquisition is in flight the surface renders fallback.
    assert_eq!(*rx.borrow(), DispatchState::Pending);

    let decision = run.await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), DispatchState::Resolved(decision.clone()));

    // A late reader of the channel still observes the terminal state.
    assert!(matches!(
        &*rx.borrow(),
        DispatchState::Resolved(DispatchDecision::Matched { .. })
    ));
    assert!(matches!(decision, DispatchDecision::Matched { .. }));
}

#[tokio::test]
async fn test_absent_url_resolves_not_found_without_extra_suspension() {
    let (dispatcher, mut rx) = new_dispatcher();
    let provider = FixedProvider(None);

    let decision = dispatcher.run(&provider).await;
    assert_eq!(decision, DispatchDecision::NotFound);

    rx.changed().await.unwrap();
    assert_eq!(
        *rx.borrow(),
        DispatchState::Resolved(DispatchDecision::NotFound)
    );
}

#[tokio::test]
async fn test_foreign_scheme_never_routes() {
    for url in [
        "https://host/TTI",
        "http://host/RenderComponentThroughput?interval=10",
        "rnbenchx://host/TTI",
    ] {
        let (dispatcher, _rx) = new_dispatcher();
        let provider = FixedProvider(Some(url.to_string()));
        assert_eq!(
            dispatcher.run(&provider).await,
            DispatchDecision::NotFound,
            "{url} must not route"
        );
    }
}
