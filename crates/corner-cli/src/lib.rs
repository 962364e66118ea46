//! CLI logic for the Corner diagram checker.
//!
//! [`run`] loads the configuration, reads the input file and checks it. The
//! binary in `main.rs` renders whatever comes back.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use config::{ConfigError, load_config};

use std::fs;

use log::info;

use corner::{Corner, CornerError, Diagnostic};

/// Outcome of a check that found no blocking problems.
#[derive(Debug)]
pub struct Checked {
    /// The text that was checked.
    pub source: String,
    /// Non-blocking findings.
    pub warnings: Vec<Diagnostic>,
}

/// Run the Corner CLI application
///
/// # Errors
///
/// Returns `CornerError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Semantic errors, and warnings when they are denied
pub fn run(args: &Args) -> Result<Checked, CornerError> {
    info!(input_path = args.input; "Checking diagram");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.trace_tokens {
        app_config = app_config.with_trace_tokens(true);
    }
    if args.deny_warnings {
        app_config = app_config.with_warnings_as_errors(true);
    }

    let source = fs::read_to_string(&args.input)?;

    let result = Corner::new(app_config).check(&source)?;
    let warnings = result.diagnostics();

    info!(
        input_path = args.input,
        warnings = warnings.len();
        "Diagram checked successfully"
    );

    Ok(Checked { source, warnings })
}
