//! HTTP API layer.
//!
//! Exposes the summary pipeline as JSON endpoints:
//!
//! - `GET /` service description
//! - `POST /generate-summary` summarize a video URL
//! - `GET /health` liveness with a timestamp

use crate::pipeline::Summarizer;
use crate::summary::{SummaryResponse, SummaryResult};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

const SERVICE_NAME: &str = "YouTube Video Summarizer API";
const SERVICE_DESCRIPTION: &str =
    "Generate point-wise summaries with conclusions from YouTube videos";

/// Shared application state.
pub struct ApiState {
    summarizer: Summarizer,
    developer: String,
}

impl ApiState {
    pub fn new(summarizer: Summarizer, developer: &str) -> Self {
        Self {
            summarizer,
            developer: developer.to_string(),
        }
    }
}

/// Build the API router.
pub fn router(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/generate-summary", post(generate_summary))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct GenerateSummaryRequest {
    url: String,
    /// Model override for this request.
    #[serde(default)]
    model: Option<String>,
}

#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    model: String,
    version: &'static str,
    description: &'static str,
    developer: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// Failure body: the failed result plus `detail`, which proxies read.
#[derive(Serialize)]
struct ErrorResponse {
    #[serde(flatten)]
    result: SummaryResponse,
    detail: String,
}

// === Handlers ===

async fn root(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    Json(ServiceInfo {
        name: SERVICE_NAME,
        model: state.summarizer.default_model().to_string(),
        version: env!("CARGO_PKG_VERSION"),
        description: SERVICE_DESCRIPTION,
        developer: state.developer.clone(),
    })
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn generate_summary(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<GenerateSummaryRequest>,
) -> impl IntoResponse {
    info!("Summary requested for {}", req.url);

    let result = state
        .summarizer
        .generate_summary(&req.url, req.model.as_deref())
        .await;

    if let SummaryResult::Failure { error } = &result {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: error.clone(),
                result: result.clone().into(),
            }),
        )
            .into_response();
    }

    Json(SummaryResponse::from(result)).into_response()
}
