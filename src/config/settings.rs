//! Configuration settings for ytsum.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub frontend: FrontendSettings,
    pub generation: GenerationSettings,
    pub youtube: YoutubeSettings,
    pub prompts: PromptSettings,
}

/// API layer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind the API server to.
    pub host: String,
    /// Port to bind the API server to.
    pub port: u16,
    /// Developer credit reported by `GET /`.
    pub developer: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            developer: "ytsum contributors".to_string(),
        }
    }
}

/// Front-end proxy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendSettings {
    pub host: String,
    pub port: u16,
    /// Full URL of the API layer's summary endpoint.
    pub api_url: String,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            api_url: "http://localhost:8080/generate-summary".to_string(),
        }
    }
}

/// Text-generation backend settings.
///
/// Any OpenAI-compatible chat completions endpoint works. The default points
/// at a local Ollama instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Base URL of the OpenAI-compatible API (including `/v1`).
    pub base_url: String,
    /// Default model name, overridable per request.
    pub model: String,
    /// API key. Ollama ignores it; hosted backends need one.
    pub api_key: Option<String>,
    /// Sampling temperature. Backend default when unset.
    pub temperature: Option<f32>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_string(),
            model: "llama3.2:3b".to_string(),
            api_key: None,
            temperature: None,
        }
    }
}

/// YouTube endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// Base URL for watch pages and the InnerTube API.
    pub base_url: String,
    /// oEmbed endpoint used for video titles.
    pub oembed_url: String,
    /// Preferred caption language code.
    pub language: String,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com".to_string(),
            oembed_url: "https://www.youtube.com/oembed".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ytsum")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Address the API server binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Address the front-end proxy binds to.
    pub fn frontend_addr(&self) -> String {
        format!("{}:{}", self.frontend.host, self.frontend.port)
    }
}
