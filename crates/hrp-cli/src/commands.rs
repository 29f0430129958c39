//! Command implementations.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use hrp_cli::logging::redact_value;
use hrp_client::{ClientConfig, PredictionClient, SubmissionController, SubmissionState};
use hrp_form::FormState;
use hrp_model::RiskAssessment;

use crate::cli::PredictArgs;

/// Outcome of a `predict` run, ready for rendering.
pub enum PredictOutcome {
    /// The service answered; display the assessment.
    Assessed(RiskAssessment),
    /// The submission failed; display the error text verbatim.
    Failed(String),
}

pub fn run_predict(args: &PredictArgs) -> Result<PredictOutcome> {
    let form = build_form(args)?;
    let snapshot = form.snapshot().context("form validation failed")?;

    let config = resolve_config(args.base_url.as_deref());
    let client = PredictionClient::new(config).context("build prediction client")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;

    let spinner = analyzing_spinner();
    let mut controller = SubmissionController::new();
    let state = runtime.block_on(controller.submit(&client, snapshot)).clone();
    spinner.finish_and_clear();

    match state {
        SubmissionState::Succeeded(response) => {
            Ok(PredictOutcome::Assessed(RiskAssessment::from_response(
                &response,
            )))
        }
        SubmissionState::Failed(message) => Ok(PredictOutcome::Failed(message)),
        SubmissionState::Idle | SubmissionState::Submitting => {
            Err(anyhow!("submission did not resolve"))
        }
    }
}

/// Map CLI flags onto the form, going through `set_field` so the catalog is
/// the single source of truth for field names.
fn build_form(args: &PredictArgs) -> Result<FormState> {
    let values = [
        ("Age", args.age.as_str()),
        ("Salt_Intake", args.salt_intake.as_str()),
        ("Stress_Score", args.stress_score.as_str()),
        ("BP_History", args.bp_history.as_str()),
        ("Sleep_Duration", args.sleep_duration.as_str()),
        ("BMI", args.bmi.as_str()),
        ("Medication", args.medication.as_str()),
        ("Family_History", args.family_history.as_str()),
        ("Exercise_Level", args.exercise_level.as_str()),
        ("Smoking_Status", args.smoking_status.as_str()),
    ];

    let mut form = FormState::new();
    for (name, raw) in values {
        debug!(field = name, value = redact_value(raw), "applying flag");
        form.set_field(name, raw)
            .with_context(|| format!("set field {name}"))?;
    }
    Ok(form)
}

/// Base URL precedence: flag, then `HRP_API_URL`, then the built-in default.
fn resolve_config(base_url_flag: Option<&str>) -> ClientConfig {
    let config = ClientConfig::from_env();
    match base_url_flag {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

fn analyzing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
