//! Web front-end server.

use crate::cli::Output;
use crate::config::Settings;
use crate::frontend::{self, FrontendState};
use std::sync::Arc;
use tracing::info;

/// Run the front-end proxy.
pub async fn run_frontend(settings: Settings) -> anyhow::Result<()> {
    let client = reqwest::Client::builder().build()?;
    let state = Arc::new(FrontendState::new(client, &settings.frontend.api_url));
    let app = frontend::router(state);

    let addr = settings.frontend_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("ytsum Front-End");
    println!();
    Output::success(&format!("Open http://{} in your browser", addr));
    Output::kv("API", &settings.frontend.api_url);
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    info!("Front-end listening on {}, proxying to {}", addr, settings.frontend.api_url);
    axum::serve(listener, app).await?;

    Ok(())
}
