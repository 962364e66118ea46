//! Corner CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use corner_cli::{
    Args,
    error_adapter::{Reportable, diagnostic_reportables, to_reportables},
};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Corner");
    debug!(args:?; "Parsed arguments");

    match corner_cli::run(&args) {
        Ok(checked) => {
            for reportable in diagnostic_reportables(checked.warnings, &checked.source) {
                report(&reportable);
            }
            info!("Completed successfully");
        }
        Err(err) => {
            // Render each diagnostic independently
            for reportable in to_reportables(&err) {
                report(&reportable);
            }
            process::exit(1);
        }
    }
}

fn report(reportable: &Reportable<'_>) {
    let reporter = miette::GraphicalReportHandler::new();

    let mut writer = String::new();
    if let Err(render_err) = reporter.render_report(&mut writer, reportable) {
        error!(render_err:%; "Failed to render report: {reportable}");
        return;
    }

    if reportable.is_warning() {
        warn!("{writer}");
    } else {
        error!("{writer}");
    }
}
