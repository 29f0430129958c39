//! Core data model for the hypertension risk client.
//!
//! Holds the static field catalog, the service wire types, and the pure
//! risk-derivation and display-token functions. No I/O lives here.

pub mod field;
pub mod response;
pub mod risk;

pub use field::{FIELDS, FieldKind, FieldSpec, field_spec};
pub use response::{PredictionResponse, ServiceError};
pub use risk::{RiskAssessment, RiskIcon, RiskLevel, risk_class, risk_icon};
