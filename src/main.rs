//! Demo host for the deep-link router.
//!
//! Plays the part of the benchmarking host application: supplies the
//! startup URL (from the command line, standing in for the platform's
//! launch plumbing), runs the one-shot dispatch, and "renders" the
//! resulting instruction to stdout. In debug builds it also prints the
//! engine label diagnostic.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use benchlink::config::load_config;
use benchlink::dispatch::{Dispatcher, InitialUrlProvider, RenderInstruction};
use benchlink::engine::{detect, EngineMarkers};
use benchlink::routing::RouteTable;

#[derive(Debug, Parser)]
#[command(name = "benchlink", about = "Deep-link router for the benchmarking host")]
struct Args {
    /// Startup deep link, e.g. rnbench://host/TTI?threshold=100. Omit to
    /// simulate a launch without a deep link.
    #[arg(long)]
    url: Option<String>,

    /// Path to a TOML config file. Missing file means defaults.
    #[arg(long, default_value = "benchlink.toml")]
    config: PathBuf,
}

/// Provider backed by the command line, in place of the platform's
/// "get initial URL" facility.
struct CliUrlProvider(Option<String>);

impl InitialUrlProvider for CliUrlProvider {
    async fn initial_url(&self) -> Option<String> {
        self.0.clone()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "benchlink=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = load_config(&args.config)?;

    tracing::info!(
        scheme = config.scheme.as_ref(),
        fallback = %config.fallback.message,
        "Configuration loaded"
    );

    let table = Arc::new(RouteTable::with_defaults());
    tracing::info!(routes = table.len(), "Route table populated");

    let (dispatcher, _state) = Dispatcher::new(table.clone(), config.scheme.as_ref());
    let provider = CliUrlProvider(args.url);
    let decision = dispatcher.run(&provider).await;

    match decision.render_instruction(&config.fallback.message) {
        RenderInstruction::View {
            handler,
            config: view_config,
        } => {
            let name = table.handler_name(handler).unwrap_or("<unknown>");
            println!("render view: {name}");
            for (key, value) in &view_config {
                println!("  {key} = {value}");
            }
        }
        RenderInstruction::Fallback { message } => {
            println!("{message}");
        }
    }

    if config.diagnostics.show_engine_label {
        // The real host would capture these markers from its runtime;
        // the demo process has none, so this reports the default.
        println!("{}", detect(&EngineMarkers::default()));
    }

    Ok(())
}
