// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod project;
pub mod reload;
pub mod watch;

use std::sync::Arc;

use tokio::sync::watch as shutdown_signal;
use tracing::{error, info};

use crate::cli::CliArgs;
use crate::config::{Settings, load_optional};
use crate::engine::{Orchestrator, RebuildAction};
use crate::errors::Result;
use crate::exec::BuildCommand;
use crate::project::ProjectLayout;
use crate::reload::{ReloadHub, ReloadServer};
use crate::watch::WatchPattern;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config file + CLI settings
/// - project layout discovery
/// - the reload server
/// - the rebuild orchestrator
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config = load_optional(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config)?;

    let layout = ProjectLayout::discover(&args.documentation_root, settings.build_dir.clone())?;
    info!(
        source = ?layout.source_dir,
        html = ?layout.html_dir,
        "project layout resolved"
    );

    let build = match &settings.build_command {
        Some(command) => BuildCommand::new(command.clone(), &layout.doc_root),
        None => layout.build_command(),
    };

    let hub = ReloadHub::new();
    let (shutdown_tx, shutdown_rx) = shutdown_signal::channel(false);

    // Serving runs independently of the poll loop; a slow or failing build
    // never stalls already-built content.
    let server = ReloadServer::bind(
        &settings.host,
        settings.port,
        layout.html_dir.clone(),
        hub.clone(),
    )
    .await?;
    {
        let shutdown_rx = shutdown_rx.clone();
        tokio::spawn(async move {
            if let Err(err) = server.serve(shutdown_rx).await {
                error!(error = %err, "reload server exited with error");
            }
        });
    }

    // Ctrl-C -> graceful shutdown.
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        let _ = shutdown_tx.send(true);
    });

    let mut orchestrator = Orchestrator::new().with_reload_hub(hub);

    let action: RebuildAction = Arc::new(move || {
        let build = build.clone();
        Box::pin(async move { build.execute().await })
    });
    let build_id = orchestrator.register_action("sphinx build", action);

    // The built-in watch set is unconditional; user patterns are additive.
    let mut patterns = layout.default_watch_patterns();
    patterns.extend(settings.watch_patterns.iter().cloned());
    for raw in patterns {
        orchestrator.bind(WatchPattern::new(raw)?, build_id);
    }

    orchestrator
        .run(build_id, settings.poll_interval, shutdown_rx)
        .await
}
