//! ytsum CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ytsum::cli::{commands, Cli, Commands};
use ytsum::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("ytsum={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&Settings::expand_path(path)))?,
        None => Settings::load()?,
    };

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            commands::run_serve(settings).await?;
        }

        Commands::Frontend {
            host,
            port,
            api_url,
        } => {
            if let Some(host) = host {
                settings.frontend.host = host;
            }
            if let Some(port) = port {
                settings.frontend.port = port;
            }
            if let Some(api_url) = api_url {
                settings.frontend.api_url = api_url;
            }
            commands::run_frontend(settings).await?;
        }

        Commands::Summarize { url, model, json } => {
            commands::run_summarize(&url, model, json, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, &settings)?;
        }
    }

    Ok(())
}
