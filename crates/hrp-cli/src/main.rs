//! Hypertension Risk Studio CLI.

use clap::{ColorChoice, Parser};
use hrp_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::Level;

mod cli;
mod commands;
mod render;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{PredictOutcome, run_predict};
use crate::render::{print_assessment, print_failure, print_fields};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Predict(args) => match run_predict(&args) {
            Ok(PredictOutcome::Assessed(assessment)) => {
                print_assessment(&assessment);
                0
            }
            Ok(PredictOutcome::Failed(message)) => {
                print_failure(&message);
                1
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Fields => {
            print_fields();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => Level::ERROR,
        Some(LogLevelArg::Warn) => Level::WARN,
        Some(LogLevelArg::Info) => Level::INFO,
        Some(LogLevelArg::Debug) => Level::DEBUG,
        Some(LogLevelArg::Trace) => Level::TRACE,
        None => cli
            .verbosity
            .tracing_level_filter()
            .into_level()
            .unwrap_or(Level::ERROR),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
        .with_log_data(cli.log_data)
}
