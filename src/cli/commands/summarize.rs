//! Summarize command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Summarizer;
use crate::summary::{SummaryResponse, SummaryResult};

/// Run the summarize command.
pub async fn run_summarize(
    url: &str,
    model: Option<String>,
    json: bool,
    settings: Settings,
) -> anyhow::Result<()> {
    let summarizer = Summarizer::new(&settings)?;
    let model_name = model
        .clone()
        .unwrap_or_else(|| summarizer.default_model().to_string());

    let spinner = (!json).then(|| Output::spinner(&format!("Summarizing with {}...", model_name)));
    let result = summarizer.generate_summary(url, model.as_deref()).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if json {
        let failed = !result.is_success();
        println!(
            "{}",
            serde_json::to_string_pretty(&SummaryResponse::from(result))?
        );
        if failed {
            anyhow::bail!("summary failed");
        }
        return Ok(());
    }

    match result {
        SummaryResult::Success { video_title, summary } => {
            Output::header(&video_title);
            println!();
            println!("Key Points:");
            for point in &summary.key_points {
                Output::list_item(point);
            }
            println!();
            println!("Conclusion:");
            println!("  {}", summary.conclusion);
            Ok(())
        }
        SummaryResult::Failure { error } => {
            Output::error(&error);
            anyhow::bail!("summary failed")
        }
    }
}
