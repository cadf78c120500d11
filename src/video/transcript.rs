//! Transcripts from YouTube's built-in captions via the InnerTube API.

use super::{Transcript, TranscriptFetcher, TranscriptSegment};
use crate::config::YoutubeSettings;
use crate::error::{Result, SummarizerError};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, instrument};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const CLIENT_VERSION: &str = "2.20241126.01.00";

#[derive(Debug, Deserialize)]
struct PlayerResponse {
    captions: Option<CaptionsData>,
}

#[derive(Debug, Deserialize)]
struct CaptionsData {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    tracklist: Option<CaptionTracklist>,
}

#[derive(Debug, Deserialize)]
struct CaptionTracklist {
    #[serde(rename = "captionTracks")]
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
}

fn fetch_failed(cause: impl std::fmt::Display) -> SummarizerError {
    SummarizerError::TranscriptFetch(cause.to_string())
}

/// Fetches caption tracks and flattens them into a [`Transcript`].
pub struct CaptionFetcher {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl CaptionFetcher {
    pub fn new(client: reqwest::Client, settings: &YoutubeSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            language: settings.language.clone(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        self.client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_failed)?
            .text()
            .await
            .map_err(fetch_failed)
    }

    async fn caption_tracks(&self, video_id: &str, api_key: &str) -> Result<Vec<CaptionTrack>> {
        let player_url = format!(
            "{}/youtubei/v1/player?key={}&prettyPrint=false",
            self.base_url, api_key
        );

        let body = serde_json::json!({
            "context": {
                "client": {
                    "hl": self.language,
                    "gl": "US",
                    "clientName": "WEB",
                    "clientVersion": CLIENT_VERSION
                }
            },
            "videoId": video_id
        });

        let response: PlayerResponse = self
            .client
            .post(&player_url)
            .header("User-Agent", USER_AGENT)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_failed)?
            .json()
            .await
            .map_err(fetch_failed)?;

        Ok(response
            .captions
            .and_then(|c| c.tracklist)
            .and_then(|t| t.caption_tracks)
            .unwrap_or_default())
    }
}

#[async_trait]
impl TranscriptFetcher for CaptionFetcher {
    #[instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript> {
        let watch_url = format!("{}/watch?v={}", self.base_url, video_id);
        debug!("Fetching watch page: {}", watch_url);

        let page_html = self.get_text(&watch_url).await?;
        let api_key = extract_api_key(&page_html)?;

        let tracks = self.caption_tracks(video_id, &api_key).await?;
        let track = tracks
            .iter()
            .find(|t| t.language_code == self.language)
            .or_else(|| tracks.first())
            .ok_or_else(|| fetch_failed(format!("no captions available for video {}", video_id)))?;

        debug!("Using caption track: lang={}", track.language_code);

        let caption_xml = self.get_text(&track.base_url).await?;
        let segments = parse_caption_xml(&caption_xml)?;

        debug!("Fetched {} caption segments", segments.len());

        Ok(Transcript {
            video_id: video_id.to_string(),
            language: track.language_code.clone(),
            segments,
        })
    }
}

fn extract_api_key(html: &str) -> Result<String> {
    let patterns = [
        r#""INNERTUBE_API_KEY"\s*:\s*"([^"]+)""#,
        r#"innertubeApiKey\s*[=:]\s*"([^"]+)""#,
    ];

    for pattern in patterns {
        let re = Regex::new(pattern).map_err(fetch_failed)?;
        if let Some(caps) = re.captures(html) {
            return Ok(caps[1].to_string());
        }
    }

    Err(fetch_failed("could not extract InnerTube API key from watch page"))
}

fn parse_caption_xml(xml: &str) -> Result<Vec<TranscriptSegment>> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);
    let mut segments = Vec::new();
    let mut timing: Option<(f64, f64)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"text" => {
                let mut start = None;
                let mut duration = None;
                for attr in e.attributes().flatten() {
                    let value = String::from_utf8_lossy(&attr.value).parse::<f64>().ok();
                    match attr.key.as_ref() {
                        b"start" => start = value,
                        b"dur" => duration = value,
                        _ => {}
                    }
                }
                timing = start.map(|s| (s, duration.unwrap_or(0.0)));
            }
            Ok(Event::Text(ref e)) => {
                if let Some((start, duration)) = timing.take() {
                    let raw = e.unescape().map_err(fetch_failed)?;
                    let text = html_escape::decode_html_entities(&raw).trim().to_string();
                    if !text.is_empty() {
                        segments.push(TranscriptSegment {
                            text,
                            start,
                            duration,
                        });
                    }
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"text" => {
                timing = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(fetch_failed(format!("error parsing caption XML: {}", e))),
            _ => {}
        }
    }

    Ok(segments)
}
