//! Immutable, validated submission payload.

use serde::Serialize;

/// Validated form contents at submit time.
///
/// Serializes to exactly the ten fields of the wire contract, numerics as
/// JSON numbers and choices as strings. Built only by
/// [`FormState::snapshot`](crate::FormState::snapshot); never mutated
/// afterwards. The in-flight request owns it for the duration of one
/// submission cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Salt_Intake")]
    pub salt_intake: f64,
    #[serde(rename = "Stress_Score")]
    pub stress_score: i64,
    #[serde(rename = "BP_History")]
    pub bp_history: String,
    #[serde(rename = "Sleep_Duration")]
    pub sleep_duration: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Medication")]
    pub medication: String,
    #[serde(rename = "Family_History")]
    pub family_history: String,
    #[serde(rename = "Exercise_Level")]
    pub exercise_level: String,
    #[serde(rename = "Smoking_Status")]
    pub smoking_status: String,
}
