//! Video lookup for ytsum.
//!
//! Resolves YouTube URLs and fetches per-video data (title, transcript)
//! behind traits so the pipeline can run against any implementation.

mod metadata;
mod transcript;
pub mod url;

pub use metadata::OEmbedFetcher;
pub use transcript::CaptionFetcher;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A submitted URL and the identifier derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    /// URL as submitted.
    pub url: String,
    /// Video identifier.
    pub id: String,
}

/// Display metadata for a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
}

/// One caption cue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Transcript of a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    /// Language code of the caption track used.
    pub language: String,
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Segment text joined with single spaces, in segment order.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Seconds covered by the captions: the end of the last cue.
    pub fn duration_seconds(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.start + s.duration)
            .fold(0.0, f64::max)
    }
}

/// Trait for video metadata providers.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch display metadata for a video ID.
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata>;
}

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the transcript for a video ID.
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript>;
}
