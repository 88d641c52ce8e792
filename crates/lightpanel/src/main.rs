use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use lightpanel::render::text::TextRenderer;
use lightpanel::render::LogRenderer;
use lightpanel::Config;
use lightpanel::EventRouter;
use tracing_subscriber::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "lightpanel", version, about = "Hall and room light control panel")]
struct Cli {
    /// Path to the config file (default: ./lightpanel.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the panel over HTTP, syncing every change to the remote store
    Serve,

    /// Apply clicks in order and print the panel after each one
    Click {
        /// Element ids, e.g. hallCorner3 or roomOn
        targets: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(config.logging.filter())
        .init();

    match cli.command {
        Command::Serve => serve(config).await,
        Command::Click { targets } => {
            click(&targets);
            Ok(())
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("lightpanel starting");

    let mut router = EventRouter::new();
    router.add_renderer(Box::new(LogRenderer));

    if config.store.enabled {
        router = with_remote_store(router, &config)?;
    } else {
        tracing::info!("Remote store disabled");
    }

    // Publish the initial (dark) panel, as the front end does on load.
    let _ = router.sync();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let mut server = tokio::spawn(lightpanel::api::serve(
        config.api.listen.clone(),
        config.api.port,
        router,
        shutdown_rx,
    ));

    tracing::info!("Press Ctrl+C to exit");
    tokio::select! {
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => tracing::info!("Received shutdown signal"),
            Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
        },
        result = &mut server => {
            return result
                .context("API server task panicked")?
                .context("API server failed");
        }
    }

    shutdown_tx.send(()).ok();
    server.await.context("API server task panicked")??;

    tracing::info!("lightpanel shutdown complete");
    Ok(())
}

fn with_remote_store(router: EventRouter, config: &Config) -> anyhow::Result<EventRouter> {
    let store = lightpanel::store::HttpStateStore::new(&config.store)
        .context("Failed to create remote store client")?;
    tracing::info!("Syncing light state to {}", store.url());
    Ok(router.with_store(Arc::new(store)))
}

fn click(targets: &[String]) {
    let mut router = EventRouter::new();
    router.add_renderer(Box::new(TextRenderer::new(std::io::stdout())));

    for target in targets {
        if router.click(target).is_none() {
            tracing::warn!("Ignored click target {:?}", target);
        }
    }

    if targets.is_empty() {
        println!("{}", lightpanel::render::text::draw(router.state()));
    }
}
