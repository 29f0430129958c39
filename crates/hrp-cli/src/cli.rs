//! CLI argument definitions for the hypertension risk client.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hrp",
    version,
    about = "Hypertension Risk Studio - patient risk assessment client",
    long_about = "Collects patient physiological and lifestyle parameters,\n\
                  submits them to the remote prediction service, and renders\n\
                  the returned risk assessment.\n\n\
                  Numeric ranges shown in the help text are advisory; the\n\
                  service re-validates them and rejects out-of-range values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient field values (PHI) to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit patient parameters and print the risk assessment.
    Predict(PredictArgs),

    /// List the intake fields with their types, ranges, and defaults.
    Fields,
}

/// One flag per intake field. Values are passed through as raw strings so
/// validation happens in one place, at snapshot time.
#[derive(Parser, Debug)]
pub struct PredictArgs {
    /// Age in years (18-100).
    #[arg(long, value_name = "YEARS")]
    pub age: String,

    /// Salt intake in grams per day (0-20).
    #[arg(long = "salt-intake", value_name = "GRAMS")]
    pub salt_intake: String,

    /// Stress score (1-10).
    #[arg(long = "stress-score", value_name = "SCORE")]
    pub stress_score: String,

    /// Blood pressure history: Normal, High, or Low.
    #[arg(long = "bp-history", value_name = "VALUE", default_value = "Normal")]
    pub bp_history: String,

    /// Sleep duration in hours per night (3-12).
    #[arg(long = "sleep-duration", value_name = "HOURS")]
    pub sleep_duration: String,

    /// Body mass index in kg/m2 (15-50).
    #[arg(long, value_name = "VALUE")]
    pub bmi: String,

    /// Current medication: None or Yes.
    #[arg(long, value_name = "VALUE", default_value = "None")]
    pub medication: String,

    /// Family history of hypertension: No or Yes.
    #[arg(long = "family-history", value_name = "VALUE", default_value = "No")]
    pub family_history: String,

    /// Exercise level: Low, Moderate, or High.
    #[arg(long = "exercise-level", value_name = "VALUE", default_value = "Low")]
    pub exercise_level: String,

    /// Smoking status: Non-Smoker or Smoker.
    #[arg(
        long = "smoking-status",
        value_name = "VALUE",
        default_value = "Non-Smoker"
    )]
    pub smoking_status: String,

    /// Override the prediction service base URL (or set HRP_API_URL).
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
