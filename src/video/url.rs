//! YouTube URL resolution.

use super::VideoReference;
use crate::error::{Result, SummarizerError};
use url::Url;

/// Hostnames accepted as YouTube links.
pub const YOUTUBE_HOSTS: [&str; 3] = ["youtu.be", "youtube.com", "www.youtube.com"];

/// Resolve a submitted URL into a [`VideoReference`].
pub fn resolve(input: &str) -> Result<VideoReference> {
    let id = extract_video_id(input)
        .ok_or_else(|| SummarizerError::InvalidUrl(input.to_string()))?;

    Ok(VideoReference {
        url: input.to_string(),
        id,
    })
}

/// Extract the video identifier from the supported URL shapes.
///
/// - `https://youtu.be/<id>`
/// - `https://www.youtube.com/watch?v=<id>`
/// - `https://www.youtube.com/embed/<id>`
/// - `https://www.youtube.com/v/<id>`
pub fn extract_video_id(input: &str) -> Option<String> {
    let url = Url::parse(input.trim()).ok()?;
    let host = url.host_str()?;

    let id = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" | "www.youtube.com" => {
            let path = url.path();
            if path == "/watch" {
                url.query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned())
            } else if path.starts_with("/embed/") || path.starts_with("/v/") {
                url.path_segments()?.nth(1).map(str::to_string)
            } else {
                None
            }
        }
        _ => None,
    }?;

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Coarse check used by the front-end: is the host one of the YouTube hosts?
pub fn is_youtube_host(input: &str) -> bool {
    Url::parse(input.trim())
        .ok()
        .and_then(|url| url.host_str().map(|h| YOUTUBE_HOSTS.contains(&h)))
        .unwrap_or(false)
}
