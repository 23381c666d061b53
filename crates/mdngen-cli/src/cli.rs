//! CLI structure and argument parsing for `mdngen`.
//!
//! The tool has a single purpose, so options live on the top-level command
//! instead of subcommands. Generation is triggered manually, writes to
//! stdout by default, and keeps its logging on stderr so the generated
//! source can be piped or redirected directly.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure for the `mdngen` command.
#[derive(Parser, Clone, Debug)]
#[command(name = "mdngen")]
#[command(version)]
#[command(about = "mdngen - generate HTML element and attribute declarations from MDN", long_about = None)]
pub struct Cli {
    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Rust)]
    pub format: OutputFormat,

    /// Documentation origin to scrape (override for mirrors and tests)
    #[arg(long, value_name = "URL", env = "MDNGEN_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Enable verbose logging output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Supported output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Generated Rust source with `attributes!`/`elements!` blocks
    Rust,
    /// The cross-linked dataset as pretty-printed JSON
    Json,
}
