//! Summary pipeline for ytsum.
//!
//! Runs one request from URL to structured summary: resolve, fetch title,
//! fetch transcript, render prompt, generate, parse. The first failing stage
//! ends the request.

use crate::config::{Prompts, Settings};
use crate::error::{Result, SummarizerError};
use crate::summary::{parse_summary_response, ChatGenerator, Summary, SummaryGenerator, SummaryResult};
use crate::video::{self, CaptionFetcher, MetadataFetcher, OEmbedFetcher, TranscriptFetcher};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The summary pipeline and the services it calls.
pub struct Summarizer {
    metadata: Arc<dyn MetadataFetcher>,
    transcripts: Arc<dyn TranscriptFetcher>,
    generator: Arc<dyn SummaryGenerator>,
    prompts: Prompts,
    default_model: String,
}

impl Summarizer {
    /// Create a summarizer talking to YouTube and the configured backend.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| SummarizerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_components(
            Arc::new(OEmbedFetcher::new(http_client.clone(), &settings.youtube)),
            Arc::new(CaptionFetcher::new(http_client.clone(), &settings.youtube)),
            Arc::new(ChatGenerator::new(&settings.generation, http_client)),
            prompts,
            &settings.generation.model,
        ))
    }

    /// Create a summarizer with custom components.
    pub fn with_components(
        metadata: Arc<dyn MetadataFetcher>,
        transcripts: Arc<dyn TranscriptFetcher>,
        generator: Arc<dyn SummaryGenerator>,
        prompts: Prompts,
        default_model: &str,
    ) -> Self {
        Self {
            metadata,
            transcripts,
            generator,
            prompts,
            default_model: default_model.to_string(),
        }
    }

    /// Model used when a request does not name one.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Summarize the video at `url`, using `model` or the default model.
    #[instrument(skip(self))]
    pub async fn summarize(&self, url: &str, model: Option<&str>) -> Result<Summary> {
        let reference = video::url::resolve(url)?;
        info!("Summarizing video {} from {}", reference.id, reference.url);

        let metadata = self.metadata.fetch_metadata(&reference.id).await?;
        let transcript = self.transcripts.fetch_transcript(&reference.id).await?;
        let text = transcript.text();
        info!(
            "Fetched \"{}\" ({} segments, {:.0}s of captions, {} characters)",
            metadata.title,
            transcript.segments.len(),
            transcript.duration_seconds(),
            text.len()
        );

        let prompt = self.prompts.summary_prompt(&text);
        let model = model.unwrap_or(&self.default_model);
        let generated = self.generator.generate(&prompt, model).await?;

        let (key_points, conclusion) = parse_summary_response(&generated)?;
        info!("Parsed {} key points", key_points.len());

        Ok(Summary {
            title: metadata.title,
            key_points,
            conclusion,
        })
    }

    /// Run [`Summarizer::summarize`] and fold the outcome into a [`SummaryResult`].
    pub async fn generate_summary(&self, url: &str, model: Option<&str>) -> SummaryResult {
        let result = self.summarize(url, model).await;
        if let Err(e) = &result {
            warn!("Summary failed for {}: {}", url, e);
        }
        result.into()
    }
}
