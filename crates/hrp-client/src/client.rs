//! HTTP client for the prediction service.

use tracing::debug;

use hrp_form::FormSnapshot;
use hrp_model::{PredictionResponse, ServiceError};

use crate::config::ClientConfig;
use crate::error::{PredictError, Result};

/// Client for the prediction service's `POST /predict` endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl PredictionClient {
    /// Create a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PredictError::Transport)?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a validated snapshot and interpret the response.
    ///
    /// Field values are patient data and are never logged here; only the
    /// endpoint and status reach the log.
    ///
    /// # Errors
    ///
    /// [`PredictError`] per the contract: `Service` for non-2xx responses,
    /// `MalformedResponse` for 2xx bodies off the contract, `Transport` for
    /// network-level failures.
    pub async fn predict(&self, snapshot: &FormSnapshot) -> Result<PredictionResponse> {
        let url = self.config.predict_url();
        debug!(%url, "submitting prediction request");

        let response = self.client.post(&url).json(snapshot).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "prediction response received");

        interpret_response(status, &body)
    }
}

/// Interpret a raw response per the service contract. Pure: no I/O.
///
/// - 2xx with a body carrying `probability`, `prediction`, and `message`
///   yields the parsed [`PredictionResponse`].
/// - 2xx with any other body is [`PredictError::MalformedResponse`].
/// - Non-2xx is [`PredictError::Service`], carrying the body's `error` text
///   when one parses out of it.
///
/// # Errors
///
/// As described above.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<PredictionResponse> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ServiceError>(body)
            .ok()
            .map(|err| err.error);
        return Err(PredictError::Service { status, message });
    }

    serde_json::from_slice(body).map_err(|err| PredictError::MalformedResponse(err.to_string()))
}
