//! Wire types for the prediction service response.

use serde::{Deserialize, Serialize};

/// Successful response body from `POST /predict`.
///
/// Exactly the three fields the service returns, unmodified. All three are
/// required; a 2xx body missing any of them does not match the contract and
/// is treated as malformed by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Estimated hypertension probability in `0.0..=1.0`.
    pub probability: f64,
    /// Binary classifier output: `1` for elevated risk, `0` otherwise.
    pub prediction: i64,
    /// Free-text recommendation from the service.
    pub message: String,
}

/// Error response body the service may return alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceError {
    /// Human-readable error text, displayed verbatim.
    pub error: String,
}
