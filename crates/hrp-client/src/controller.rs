//! Submission state machine.
//!
//! One controller instance owns one [`SubmissionState`] for the session.
//! Transitions replace the state atomically; at most one request is ever in
//! flight because a submission can only begin from Idle, Succeeded, or
//! Failed. There is no cancellation: once Submitting, the request runs to
//! completion before new input is accepted.

use tracing::{info, warn};

use hrp_form::FormSnapshot;
use hrp_model::PredictionResponse;

use crate::client::PredictionClient;
use crate::error::{PredictError, Result};

/// Where the current submission cycle stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// No submission attempted yet (initial state).
    #[default]
    Idle,
    /// A request is in flight; further submissions are no-ops.
    Submitting,
    /// The service answered on-contract.
    Succeeded(PredictionResponse),
    /// The request failed; holds the user-facing message.
    Failed(String),
}

impl SubmissionState {
    /// True while a request is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// True when a new submission may begin.
    #[must_use]
    pub const fn accepts_submission(&self) -> bool {
        !self.is_submitting()
    }
}

/// Owns the submission lifecycle: gates concurrent submissions, performs the
/// request, and maps the outcome to [`SubmissionState`].
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
}

impl SubmissionController {
    /// Controller in the Idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Try to start a submission cycle.
    ///
    /// From Idle, Succeeded, or Failed: clears any prior result or error,
    /// moves to Submitting, and returns `true`. While Submitting: leaves the
    /// state untouched and returns `false` — no second request may be issued.
    pub fn try_begin(&mut self) -> bool {
        if self.state.is_submitting() {
            warn!("submission already in flight, ignoring");
            return false;
        }
        self.state = SubmissionState::Submitting;
        true
    }

    /// Resolve the in-flight submission with the request outcome.
    ///
    /// Pairs with [`try_begin`](Self::try_begin); call it only while
    /// Submitting. A success stores the response verbatim; a failure stores
    /// its user-facing message, leaving the form fully re-editable for a
    /// manual retry.
    pub fn complete(&mut self, outcome: Result<PredictionResponse>) -> &SubmissionState {
        self.state = match outcome {
            Ok(response) => {
                info!(prediction = response.prediction, "prediction succeeded");
                SubmissionState::Succeeded(response)
            }
            Err(error) => {
                warn!(%error, "prediction failed");
                SubmissionState::Failed(error.user_message())
            }
        };
        &self.state
    }

    /// Run one full submission cycle.
    ///
    /// The snapshot is owned by this request and dropped when it resolves.
    /// If a request is already in flight this is a no-op and the current
    /// state is returned unchanged.
    pub async fn submit(
        &mut self,
        client: &PredictionClient,
        snapshot: FormSnapshot,
    ) -> &SubmissionState {
        if !self.try_begin() {
            return &self.state;
        }
        let outcome = client.predict(&snapshot).await;
        self.complete(outcome)
    }
}
