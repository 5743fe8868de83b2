//! Boxcut CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use boxcut_cli::{Args, error_adapter::to_reportable};

/// Initializes `env_logger`, falling back to `warn` on an unknown level name.
fn init_logger(level: &str) {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Boxcut");
}

fn main() {
    // Install before anything else so panics during arg parsing are pretty too
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    let Err(err) = boxcut_cli::run(&args) else {
        info!(output = args.output_path(); "Completed successfully");
        return;
    };

    // Dimension errors carry the typed text, so miette can underline the bad part
    let mut report = String::new();
    miette::GraphicalReportHandler::new()
        .render_report(&mut report, &to_reportable(&err))
        .expect("Writing to String buffer is infallible");
    error!("{report}");

    process::exit(1);
}
