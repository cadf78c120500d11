//! CLI module for ytsum.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// ytsum - YouTube video summarizer
///
/// Turns a video's captions into key points and a conclusion using a local
/// (or any OpenAI-compatible) language model.
#[derive(Parser, Debug)]
#[command(name = "ytsum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the summary API server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Start the web front-end that proxies to the API server
    Frontend {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// URL of the API server's summary endpoint
        #[arg(long, env = "YTSUM_API_URL")]
        api_url: Option<String>,
    },

    /// Summarize a single video and print the result
    Summarize {
        /// YouTube video URL
        url: String,

        /// Model to use instead of the configured default
        #[arg(short, long)]
        model: Option<String>,

        /// Print the JSON response instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
