//! ytsum - YouTube video summarizer
//!
//! Fetches a video's title and captions, asks a language model for a
//! point-wise summary, and parses the reply into key points and a conclusion.
//!
//! # Architecture
//!
//! - `config` - Settings and prompt templates
//! - `video` - URL resolution, oEmbed metadata, caption transcripts
//! - `summary` - Generation backend and response parsing
//! - `pipeline` - The per-request summary chain
//! - `api` - JSON HTTP API over the pipeline
//! - `frontend` - Web page and proxy to the API
//!
//! # Example
//!
//! ```rust,no_run
//! use ytsum::config::Settings;
//! use ytsum::pipeline::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let summarizer = Summarizer::new(&settings)?;
//!
//!     let summary = summarizer
//!         .summarize("https://www.youtube.com/watch?v=dQw4w9WgXcQ", None)
//!         .await?;
//!     for point in &summary.key_points {
//!         println!("- {}", point);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod frontend;
pub mod openai;
pub mod pipeline;
pub mod summary;
pub mod video;

#[cfg(test)]
mod test_support;

pub use error::{Result, SummarizerError};
