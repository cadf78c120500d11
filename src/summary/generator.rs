//! Summary text generation against an OpenAI-compatible backend.

use crate::config::GenerationSettings;
use crate::error::{Result, SummarizerError};
use crate::openai::create_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Trait for text-generation backends.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// Send a rendered prompt to `model` and return the raw generated text.
    async fn generate(&self, prompt: &str, model: &str) -> Result<String>;
}

/// Generator backed by the chat completions API.
pub struct ChatGenerator {
    client: Client<OpenAIConfig>,
    temperature: Option<f32>,
}

impl ChatGenerator {
    pub fn new(settings: &GenerationSettings, http_client: reqwest::Client) -> Self {
        Self {
            client: create_client(settings, http_client),
            temperature: settings.temperature,
        }
    }
}

#[async_trait]
impl SummaryGenerator for ChatGenerator {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str, model: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| SummarizerError::Generation(e.to_string()))?
                .into(),
        ];

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder.model(model).messages(messages);
        if let Some(temperature) = self.temperature {
            builder.temperature(temperature);
        }
        let request = builder
            .build()
            .map_err(|e| SummarizerError::Generation(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| SummarizerError::Generation(e.to_string()))?;

        let text = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| SummarizerError::Generation("Empty response from model".to_string()))?;

        debug!("Generated {} characters", text.len());

        Ok(text)
    }
}
