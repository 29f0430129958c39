//! Prediction service client for the hypertension risk assessment.
//!
//! Owns the submission side of the system: the
//! [`SubmissionController`] state machine
//! (Idle → Submitting → Succeeded/Failed), the [`PredictionClient`] that
//! performs the single `POST /predict` call per cycle, and the mapping from
//! failures to user-visible error text.
//!
//! The controller is single-threaded and cooperative: the submission flow
//! suspends only at the network call and no second request can start until
//! the first resolves. Response interpretation is factored out as a pure
//! function ([`interpret_response`]) so contract handling is testable
//! without a live service.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;

pub use client::{PredictionClient, interpret_response};
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use controller::{SubmissionController, SubmissionState};
pub use error::{FALLBACK_ERROR_MESSAGE, PredictError, Result};
