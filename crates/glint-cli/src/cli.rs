//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Language detection and lightweight diagnostics for source files
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overridden by GLINT_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify and validate files (or stdin)
    Check(CheckArgs),

    /// Print the detected language of a file (or stdin)
    Detect(DetectArgs),

    /// List known languages, their extensions and whether they are validated
    Languages,

    /// Print the JSON Schema for .glint.toml
    Schema,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check; `-` or nothing reads stdin
    pub paths: Vec<PathBuf>,

    /// Validate as this language id, skipping classification
    #[arg(long, value_name = "ID")]
    pub lang: Option<String>,

    /// Extension hint used instead of the file's own extension
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file (default: ./.glint.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Classify by content even when the extension is known
    #[arg(long)]
    pub always_detect: bool,
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// File to classify; `-` or nothing reads stdin
    pub path: Option<PathBuf>,

    /// Extension hint used instead of the file's own extension
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Show how the decision was made and every signature score
    #[arg(long)]
    pub explain: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
