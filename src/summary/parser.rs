//! Parsing of generated summary text.
//!
//! The backend is asked for bullet lines, a `Conclusion:` line, then prose.
//! Nothing forces it to comply, so this only splits on the first marker and
//! cleans up bullet lines; it does not check point counts.

use crate::error::{Result, SummarizerError};

/// Marker separating key points from the conclusion.
pub const CONCLUSION_MARKER: &str = "Conclusion:";

const KEY_POINTS_LABEL: &str = "Key Points:";

/// Split generated text into key points and a conclusion.
pub fn parse_summary_response(text: &str) -> Result<(Vec<String>, String)> {
    let (points_text, conclusion_text) = text.split_once(CONCLUSION_MARKER).ok_or_else(|| {
        SummarizerError::MalformedSummary("Missing conclusion section".to_string())
    })?;

    let key_points = points_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != KEY_POINTS_LABEL)
        .map(|line| line.trim_start_matches(['-', ' ']).trim())
        .filter(|point| !point.is_empty())
        .map(str::to_string)
        .collect();

    Ok((key_points, conclusion_text.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_format() {
        let (points, conclusion) = parse_summary_response("- A\n- B\nConclusion:\nC.").unwrap();
        assert_eq!(points, vec!["A", "B"]);
        assert_eq!(conclusion, "C.");
    }

    #[test]
    fn test_missing_marker_is_malformed() {
        let err = parse_summary_response("- A\n- B\nIn summary, C.").unwrap_err();
        assert!(matches!(err, SummarizerError::MalformedSummary(_)));
        assert_eq!(
            err.to_string(),
            "Invalid summary format: Missing conclusion section"
        );

        assert!(parse_summary_response("").is_err());
        assert!(parse_summary_response("conclusion: lowercase").is_err());
    }

    #[test]
    fn test_key_points_label_is_dropped() {
        let text = "Key Points:\n- First\n- Second\n\nConclusion:\nAll done.";
        let (points, conclusion) = parse_summary_response(text).unwrap();
        assert_eq!(points, vec!["First", "Second"]);
        assert_eq!(conclusion, "All done.");
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let text = "\n\n   - Spaced point   \n\n\t-Tight point\r\n- \n-\nConclusion:   \n\n  Wrapped up.  \n";
        let (points, conclusion) = parse_summary_response(text).unwrap();
        assert_eq!(points, vec!["Spaced point", "Tight point"]);
        assert_eq!(conclusion, "Wrapped up.");
    }

    #[test]
    fn test_unbulleted_lines_are_kept() {
        let text = "Here is the summary\n- Point\nConclusion: inline conclusion";
        let (points, conclusion) = parse_summary_response(text).unwrap();
        assert_eq!(points, vec!["Here is the summary", "Point"]);
        assert_eq!(conclusion, "inline conclusion");
    }

    #[test]
    fn test_zero_points_accepted() {
        let (points, conclusion) = parse_summary_response("Conclusion:\nOnly prose.").unwrap();
        assert!(points.is_empty());
        assert_eq!(conclusion, "Only prose.");
    }

    #[test]
    fn test_splits_on_first_marker_only() {
        let text = "- A\nConclusion:\nFirst part.\nConclusion:\nSecond part.";
        let (points, conclusion) = parse_summary_response(text).unwrap();
        assert_eq!(points, vec!["A"]);
        assert_eq!(conclusion, "First part.\nConclusion:\nSecond part.");
    }

    #[test]
    fn test_nested_dashes_are_stripped() {
        let (points, _) = parse_summary_response("-- double\n - - spaced\nConclusion:").unwrap();
        assert_eq!(points, vec!["double", "spaced"]);
    }

    #[test]
    fn test_empty_conclusion() {
        let (points, conclusion) = parse_summary_response("- A\nConclusion:").unwrap();
        assert_eq!(points, vec!["A"]);
        assert_eq!(conclusion, "");
    }
}
