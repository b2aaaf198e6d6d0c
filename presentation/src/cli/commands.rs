//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for batch results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored per-question summary
    Table,
    /// Full result records
    Json,
    /// Only question numbers and selected letters
    Simple,
    /// Input questions echoed back with the selected answer flagged
    Annotated,
}

impl From<OutputFormat> for quiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => quiz_domain::OutputFormat::Table,
            OutputFormat::Json => quiz_domain::OutputFormat::Json,
            OutputFormat::Simple => quiz_domain::OutputFormat::Simple,
            OutputFormat::Annotated => quiz_domain::OutputFormat::Annotated,
        }
    }
}

/// CLI arguments for quiz-quorum
#[derive(Parser, Debug)]
#[command(name = "quiz-quorum")]
#[command(author, version, about = "Answer multiple-choice questions by proposer/critic consensus")]
#[command(long_about = r#"
Quiz Quorum answers multiple-choice questions with two cooperating model roles.

For every question:
1. Proposer: selects an answer letter and explains why
2. Critic: agrees, or disagrees with criticism
3. Repeat with the criticism until the critic agrees or the iteration limit is hit

Questions are processed concurrently, up to --concurrency at a time.

Configuration is loaded from (in priority order):
1. Environment     GEMINI_API_KEY, GEMINI_MODEL, MAX_CONCURRENT_WORKERS, ...
2. --config <path> Explicit config file
3. ./quiz-quorum.toml  Project-level config
4. ~/.config/quiz-quorum/config.toml   Global config

Example:
  quiz-quorum questions.json
  quiz-quorum questions.json -o json --concurrency 10
  quiz-quorum questions.json -o annotated --strict > answered.json
"#)]
pub struct Cli {
    /// JSON file with an array of questions
    #[arg(value_name = "QUESTIONS", required_unless_present = "show_config")]
    pub questions: Option<PathBuf>,

    /// Output format (defaults to [output] format in config, then table)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Exit with a non-zero status if any question failed
    #[arg(long)]
    pub strict: bool,

    /// Maximum number of questions answered at once
    #[arg(short, long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Maximum proposer/critic round trips per question
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append the proposer/critic transcript to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
