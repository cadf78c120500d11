//! Video metadata via YouTube's oEmbed endpoint.

use super::{MetadataFetcher, VideoMetadata};
use crate::config::YoutubeSettings;
use crate::error::{Result, SummarizerError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: Option<String>,
}

/// Fetches video titles from the oEmbed endpoint.
pub struct OEmbedFetcher {
    client: reqwest::Client,
    oembed_url: String,
    watch_base_url: String,
}

impl OEmbedFetcher {
    pub fn new(client: reqwest::Client, settings: &YoutubeSettings) -> Self {
        Self {
            client,
            oembed_url: settings.oembed_url.clone(),
            watch_base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MetadataFetcher for OEmbedFetcher {
    #[instrument(skip(self))]
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata> {
        let watch_url = format!("{}/watch?v={}", self.watch_base_url, video_id);
        debug!("Requesting oEmbed for {}", watch_url);

        let body: OEmbedResponse = self
            .client
            .get(&self.oembed_url)
            .query(&[("url", watch_url.as_str()), ("format", "json")])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SummarizerError::MetadataFetch(e.to_string()))?
            .json()
            .await
            .map_err(|e| SummarizerError::MetadataFetch(e.to_string()))?;

        let title = body.title.ok_or_else(|| {
            SummarizerError::MetadataFetch("oEmbed response has no title".to_string())
        })?;

        Ok(VideoMetadata {
            id: video_id.to_string(),
            title,
        })
    }
}
