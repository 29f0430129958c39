//! Risk category derivation and display-token mapping.
//!
//! The category space is declared as three levels, but the service contract
//! only exposes a binary prediction, so [`RiskLevel::from_prediction`] never
//! yields [`RiskLevel::Moderate`]. The Moderate tier and its display tokens
//! are kept for the day the contract grows a continuous-risk band; no
//! probability banding is inferred here.

use std::fmt;

use crate::response::PredictionResponse;

/// Risk category shown to the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Derive the risk category from the binary prediction.
    ///
    /// `1` maps to High; `0` and any other value map to Low. Pure and
    /// idempotent.
    #[must_use]
    pub const fn from_prediction(prediction: i64) -> Self {
        if prediction == 1 { Self::High } else { Self::Low }
    }

    /// Canonical label ("Low", "Moderate", "High").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Parse a canonical label. Case-sensitive, like the wire contract.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Self::Low),
            "Moderate" => Some(Self::Moderate),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Iconography token for a risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskIcon {
    /// Low risk.
    CheckCircle,
    /// Moderate risk.
    AlertTriangle,
    /// High risk.
    Heart,
    /// Neutral fallback for anything unrecognized.
    Activity,
}

impl RiskIcon {
    /// Terminal glyph for the icon.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::CheckCircle => "\u{2714}",
            Self::AlertTriangle => "\u{26a0}",
            Self::Heart => "\u{2665}",
            Self::Activity => "\u{2022}",
        }
    }
}

/// Map a risk label to its icon token. Unrecognized input falls back to the
/// neutral icon rather than failing.
#[must_use]
pub fn risk_icon(label: &str) -> RiskIcon {
    match RiskLevel::from_label(label) {
        Some(RiskLevel::Low) => RiskIcon::CheckCircle,
        Some(RiskLevel::Moderate) => RiskIcon::AlertTriangle,
        Some(RiskLevel::High) => RiskIcon::Heart,
        None => RiskIcon::Activity,
    }
}

/// Map a risk label to its style class. Unrecognized input maps to the empty
/// (unstyled) class.
#[must_use]
pub fn risk_class(label: &str) -> &'static str {
    match RiskLevel::from_label(label) {
        Some(RiskLevel::Low) => "risk-low",
        Some(RiskLevel::Moderate) => "risk-moderate",
        Some(RiskLevel::High) => "risk-high",
        None => "",
    }
}

/// Display model derived from a successful service response.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// Probability as returned by the service, in `0.0..=1.0`.
    pub probability: f64,
    /// Derived category (only ever Low or High, see module docs).
    pub risk: RiskLevel,
    /// Service message, verbatim.
    pub message: String,
}

impl RiskAssessment {
    /// Build the display model from a service response.
    #[must_use]
    pub fn from_response(response: &PredictionResponse) -> Self {
        Self {
            probability: response.probability,
            risk: RiskLevel::from_prediction(response.prediction),
            message: response.message.clone(),
        }
    }

    /// Headline probability, e.g. `"23.0% Risk"`.
    #[must_use]
    pub fn probability_label(&self) -> String {
        format!("{:.1}% Risk", self.probability * 100.0)
    }

    /// Category line, e.g. `"High Risk Level"`.
    #[must_use]
    pub fn risk_label(&self) -> String {
        format!("{} Risk Level", self.risk.label())
    }

    /// Short note on the raw classifier output.
    #[must_use]
    pub const fn prediction_note(&self) -> &'static str {
        match self.risk {
            RiskLevel::High => "Hypertension Risk Detected",
            _ => "Low Risk",
        }
    }
}
