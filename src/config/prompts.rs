//! Prompt templates for ytsum.
//!
//! The summary template can be replaced by placing a `summary.toml` file in
//! the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub summary: SummaryPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompt for point-wise video summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    /// Template with a single `{{transcript}}` placeholder.
    pub template: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            template: r#"You are a professional content summarizer. Based on the following transcript from a YouTube video,
create a comprehensive point-wise summary of the main topics and key takeaways, followed by a brief conclusion.

Transcript:
{{transcript}}

Requirements for the summary:
- Extract 8-10 main points from the content
- Each point should be clear and concise
- Capture the essential information and key takeaways
- Use professional language
- Start each point with a bullet point (-)
- Focus on the most important concepts and ideas

After the points, provide a brief conclusion that:
- Synthesizes the main themes
- Highlights the overall significance
- Connects the key ideas together

Format your response exactly like this:
- First key point
- Second key point
[continue with remaining points]


Conclusion:
[4-5 sentences summarizing the overall message and significance]"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let summary_path = custom_path.join("summary.toml");
            if summary_path.exists() {
                let content = std::fs::read_to_string(&summary_path)?;
                prompts.summary = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render the summary prompt for a transcript.
    ///
    /// Custom variables are applied to the template first; the transcript is
    /// inserted last so its text is never rewritten.
    pub fn summary_prompt(&self, transcript: &str) -> String {
        let mut custom = self.variables.clone();
        custom.remove("transcript");
        Self::render(&self.summary.template, &custom).replace("{{transcript}}", transcript)
    }
}
