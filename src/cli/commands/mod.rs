//! CLI command implementations.

mod config;
mod frontend;
mod serve;
mod summarize;

pub use config::run_config;
pub use frontend::run_frontend;
pub use serve::run_serve;
pub use summarize::run_summarize;
