//! Summary API server.

use crate::api::{self, ApiState};
use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Summarizer;
use std::sync::Arc;
use tracing::info;

/// Run the HTTP API server.
pub async fn run_serve(settings: Settings) -> anyhow::Result<()> {
    let summarizer = Summarizer::new(&settings)?;
    let state = Arc::new(ApiState::new(summarizer, &settings.server.developer));
    let app = api::router(state);

    let addr = settings.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("ytsum API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    Output::kv("Model", &settings.generation.model);
    Output::kv("Backend", &settings.generation.base_url);
    println!();
    println!("Endpoints:");
    Output::kv("Info", "GET  /");
    Output::kv("Summarize", "POST /generate-summary");
    Output::kv("Health", "GET  /health");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    info!("API server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
