//! Configuration module for ytsum.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, SummaryPrompts};
pub use settings::{
    FrontendSettings, GenerationSettings, PromptSettings, ServerSettings, Settings,
    YoutubeSettings,
};
