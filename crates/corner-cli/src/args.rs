//! Command-line argument definitions for the Corner CLI.
//!
//! Arguments select the input file, the configuration file and logging
//! verbosity, and can override configuration values for a single run.

use clap::Parser;

/// Check a Corner diagram and report problems
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Corner file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log every token the parser accepts (needs `--log-level trace`)
    #[arg(long)]
    pub trace_tokens: bool,

    /// Fail when the analysis reports warnings
    #[arg(long)]
    pub deny_warnings: bool,
}
