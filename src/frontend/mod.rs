//! Front-end proxy.
//!
//! Serves the web page and forwards submitted URLs to the API layer,
//! reshaping API errors into `{success: false, error}` for the page.

use crate::error::SummarizerError;
use crate::video::url::is_youtube_host;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

const INDEX_HTML: &str = include_str!("index.html");

/// Shared proxy state.
pub struct FrontendState {
    client: reqwest::Client,
    api_url: String,
}

impl FrontendState {
    pub fn new(client: reqwest::Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
        }
    }

    /// Forward a URL to the API layer and shape the reply for the page.
    async fn forward(&self, url: &str) -> Result<(StatusCode, Value), SummarizerError> {
        debug!("Forwarding {} to {}", url, self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .json(&json!({ "url": url }))
            .send()
            .await
            .map_err(|e| SummarizerError::UpstreamConnection(e.to_string()))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);

        if status.is_success() {
            let body: Value = response
                .json()
                .await
                .map_err(|e| SummarizerError::UpstreamConnection(e.to_string()))?;
            return Ok((StatusCode::OK, body));
        }

        let detail = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("detail").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());

        Ok((status, failure_body(&format!("API Error: {}", detail))))
    }
}

/// Build the proxy router.
pub fn router(state: Arc<FrontendState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/summarize", post(summarize))
        .with_state(state)
}

fn failure_body(error: &str) -> Value {
    json!({ "success": false, "error": error })
}

fn failure(status: StatusCode, error: &str) -> Response {
    (status, Json(failure_body(error))).into_response()
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn summarize(
    State(state): State<Arc<FrontendState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let url = match body {
        Ok(Json(body)) => body.get("url").cloned().unwrap_or(Value::Null),
        Err(rejection) => {
            debug!("Unreadable summarize request: {}", rejection);
            Value::Null
        }
    };

    let url = match url {
        Value::Null => "",
        Value::String(ref s) => s.trim(),
        _ => return failure(StatusCode::BAD_REQUEST, "Please provide a valid YouTube URL"),
    };

    if url.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "Please provide a YouTube URL");
    }

    if !is_youtube_host(url) {
        return failure(StatusCode::BAD_REQUEST, "Please provide a valid YouTube URL");
    }

    match state.forward(url).await {
        Ok((status, body)) => (status, Json(body)).into_response(),
        Err(e) => {
            warn!("Summarizer API unreachable: {}", e);
            failure(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, spawn_server};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stand-in API layer that counts calls.
    async fn fake_api(hits: Arc<AtomicUsize>) -> String {
        let handler = move |Json(body): Json<Value>| {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                match body["url"].as_str() {
                    Some("https://youtu.be/abc123") => (
                        StatusCode::OK,
                        Json(json!({
                            "success": true,
                            "video_title": "Test Video",
                            "summary": {
                                "title": "Test Video",
                                "key_points": ["Point one", "Point two"],
                                "conclusion": "This is the end."
                            },
                            "error": null
                        })),
                    )
                        .into_response(),
                    Some("https://youtu.be/broken") => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
                    }
                    _ => (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "detail": "Failed to fetch transcript: no captions" })),
                    )
                        .into_response(),
                }
            }
        };
        let base = spawn_server(Router::new().route("/generate-summary", post(handler))).await;
        format!("{}/generate-summary", base)
    }

    async fn proxy(api_url: &str) -> String {
        let state = Arc::new(FrontendState::new(reqwest::Client::new(), api_url));
        spawn_server(router(state)).await
    }

    async fn submit(base: &str, body: Value) -> (reqwest::StatusCode, Value) {
        let response = reqwest::Client::new()
            .post(format!("{}/summarize", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let base = proxy("http://127.0.0.1:1/generate-summary").await;
        let response = reqwest::get(format!("{}/", base)).await.unwrap();

        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("<form"));
        assert!(html.contains("/summarize"));

        for control in [
            "id=\"video-thumbnail\"",
            "id=\"copy-btn\"",
            "id=\"share-btn\"",
            "id=\"download-btn\"",
            "function extractVideoId",
            "function isValidYouTubeUrl",
            "navigator.share",
            "navigator.clipboard.writeText",
            "new Blob",
            "youtube.com/embed/",
        ] {
            assert!(html.contains(control), "page is missing {}", control);
        }
    }

    #[tokio::test]
    async fn test_relays_success() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = proxy(&fake_api(hits.clone()).await).await;

        let (status, body) = submit(&base, json!({ "url": "https://youtu.be/abc123" })).await;

        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["video_title"], "Test Video");
        assert_eq!(body["summary"]["key_points"][1], "Point two");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_youtube_url_is_rejected_locally() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = proxy(&fake_api(hits.clone()).await).await;

        let (status, body) = submit(&base, json!({ "url": "https://example.com" })).await;

        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "success": false, "error": "Please provide a valid YouTube URL" })
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_url_is_rejected_locally() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = proxy(&fake_api(hits.clone()).await).await;

        let (status, body) = submit(&base, json!({})).await;
        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please provide a YouTube URL");

        let (status, _) = submit(&base, json!({ "url": "   " })).await;
        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_string_url_is_rejected_as_json() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = proxy(&fake_api(hits.clone()).await).await;

        let (status, body) = submit(&base, json!({ "url": 5 })).await;
        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "success": false, "error": "Please provide a valid YouTube URL" })
        );

        let (status, body) = submit(&base, json!({ "url": ["https://youtu.be/abc123"] })).await;
        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please provide a valid YouTube URL");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_json_body_is_rejected_as_json() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = proxy(&fake_api(hits.clone()).await).await;

        for (content_type, payload) in [
            ("application/json", "url=https://youtu.be/abc123"),
            ("text/plain", "https://youtu.be/abc123"),
        ] {
            let response = reqwest::Client::new()
                .post(format!("{}/summarize", base))
                .header("Content-Type", content_type)
                .body(payload)
                .send()
                .await
                .unwrap();

            assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
            let body: Value = response.json().await.unwrap();
            assert_eq!(
                body,
                json!({ "success": false, "error": "Please provide a YouTube URL" })
            );
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_error_detail_is_relayed() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = proxy(&fake_api(hits).await).await;

        let (status, body) =
            submit(&base, json!({ "url": "https://www.youtube.com/watch?v=nocaptions" })).await;

        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "API Error: Failed to fetch transcript: no captions"
        );
    }

    #[tokio::test]
    async fn test_upstream_error_without_detail_is_generic() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = proxy(&fake_api(hits).await).await;

        let (status, body) = submit(&base, json!({ "url": "https://youtu.be/broken" })).await;

        assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "API Error: Unknown error");
    }

    #[tokio::test]
    async fn test_unreachable_api_is_500() {
        let api_url = format!("{}/generate-summary", closed_port_url().await);
        let base = proxy(&api_url).await;

        let (status, body) = submit(&base, json!({ "url": "https://youtu.be/abc123" })).await;

        assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to connect to the summarizer API"));
    }
}
