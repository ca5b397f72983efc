// rota/src/cli.rs
//! This file defines the command-line interface (CLI) for the rota application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rota",
    author = "ROTA Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Normalize criminal-offense descriptions into canonical text",
    long_about = "Rota rewrites raw criminal-offense descriptions, as they appear in court and law-enforcement records, into a canonical lowercase form. Abbreviations are expanded, record-system artifacts are removed, and punctuation and spacing are normalized, so that equivalent charges read the same way.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", env = "ROTA_THEME", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `rota` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalizes descriptions given as arguments, or one per line from a file or stdin.
    #[command(about = "Normalizes descriptions given as arguments, or one per line from a file or stdin.")]
    Normalize(NormalizeCommand),

    /// Shows every pipeline stage and each rule that changed a description.
    #[command(about = "Shows every pipeline stage and each rule that changed a description.")]
    Explain(ExplainCommand),

    /// Lists the rule catalog in execution order.
    #[command(about = "Lists the rule catalog in execution order, with its fingerprint.")]
    Rules(RulesCommand),

    /// Reports descriptions whose output changes when normalized a second time.
    #[command(about = "Reports descriptions whose output changes when normalized a second time.")]
    Drift(DriftCommand),
}

/// Arguments for the `normalize` command.
#[derive(Parser, Debug)]
pub struct NormalizeCommand {
    /// Descriptions to normalize. When empty, input is read line by line.
    #[arg(value_name = "TEXT", help = "Descriptions to normalize (reads lines from --input-file or stdin if omitted).")]
    pub texts: Vec<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "texts", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write normalized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Emit one JSON record per input instead of plain lines.
    #[arg(long, help = "Emit one JSON object per line with the input and its normalized form.")]
    pub json: bool,
}

/// Arguments for the `explain` command.
#[derive(Parser, Debug)]
pub struct ExplainCommand {
    /// The description to explain.
    #[arg(value_name = "TEXT", help = "The description to trace through the pipeline.")]
    pub text: String,

    /// Print the trace as JSON.
    #[arg(long, help = "Print the full trace as JSON.")]
    pub json: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Only list substitution rules at this priority.
    #[arg(long, value_name = "N", help = "Only list substitution rules with this priority.")]
    pub priority: Option<i32>,

    /// Print the catalog as JSON.
    #[arg(long, help = "Print the catalog as JSON.")]
    pub json: bool,
}

/// Arguments for the `drift` command.
#[derive(Parser, Debug)]
pub struct DriftCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}
