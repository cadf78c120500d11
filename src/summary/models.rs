//! Summary data types and their wire form.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A structured video summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    /// Key points in generation order, never empty strings.
    pub key_points: Vec<String>,
    pub conclusion: String,
}

/// Outcome of one summary request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResult {
    Success { video_title: String, summary: Summary },
    Failure { error: String },
}

impl SummaryResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SummaryResult::Success { .. })
    }

    /// Error message, if the request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            SummaryResult::Success { .. } => None,
            SummaryResult::Failure { error } => Some(error),
        }
    }
}

impl From<Result<Summary>> for SummaryResult {
    fn from(result: Result<Summary>) -> Self {
        match result {
            Ok(summary) => SummaryResult::Success {
                video_title: summary.title.clone(),
                summary,
            },
            Err(e) => SummaryResult::Failure {
                error: e.to_string(),
            },
        }
    }
}

/// JSON shape of a [`SummaryResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub video_title: Option<String>,
    pub summary: Option<Summary>,
    pub error: Option<String>,
}

impl From<SummaryResult> for SummaryResponse {
    fn from(result: SummaryResult) -> Self {
        match result {
            SummaryResult::Success {
                video_title,
                summary,
            } => SummaryResponse {
                success: true,
                video_title: Some(video_title),
                summary: Some(summary),
                error: None,
            },
            SummaryResult::Failure { error } => SummaryResponse {
                success: false,
                video_title: None,
                summary: None,
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummarizerError;

    #[test]
    fn test_failure_serializes_nulls() {
        let result: SummaryResult =
            Err(SummarizerError::Generation("backend down".to_string())).into();
        assert!(!result.is_success());

        let json = serde_json::to_value(SummaryResponse::from(result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "video_title": null,
                "summary": null,
                "error": "Failed to generate summary: backend down"
            })
        );
    }

    #[test]
    fn test_success_populates_title_and_summary() {
        let summary = Summary {
            title: "Test Video".to_string(),
            key_points: vec!["One".to_string()],
            conclusion: "Done.".to_string(),
        };
        let result: SummaryResult = Ok(summary.clone()).into();
        assert_eq!(result.error(), None);

        let response = SummaryResponse::from(result);
        assert!(response.success);
        assert_eq!(response.video_title.as_deref(), Some("Test Video"));
        assert_eq!(response.summary, Some(summary));
        assert_eq!(response.error, None);
    }
}
