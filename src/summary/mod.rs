//! Summary generation and parsing.

mod generator;
mod models;
mod parser;

pub use generator::{ChatGenerator, SummaryGenerator};
pub use models::{Summary, SummaryResponse, SummaryResult};
pub use parser::{parse_summary_response, CONCLUSION_MARKER};
