//! OpenAI-compatible client configuration.

use crate::config::GenerationSettings;
use async_openai::{config::OpenAIConfig, Client};

/// Placeholder key for backends that ignore authentication (Ollama).
const PLACEHOLDER_API_KEY: &str = "ollama";

/// Create a chat client for the configured generation backend.
///
/// Reuses the given HTTP client so all outbound calls share one pool.
pub fn create_client(settings: &GenerationSettings, http_client: reqwest::Client) -> Client<OpenAIConfig> {
    let api_key = settings
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());

    let config = OpenAIConfig::new()
        .with_api_base(settings.base_url.trim_end_matches('/'))
        .with_api_key(api_key);

    Client::with_config(config).with_http_client(http_client)
}
