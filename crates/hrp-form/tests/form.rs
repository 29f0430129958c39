//! Tests for form state and snapshot validation.

use hrp_form::{FormError, FormState};
use hrp_model::FIELDS;

/// Fill every numeric field with the scenario values from the service
/// contract documentation.
fn filled_form() -> FormState {
    let mut form = FormState::new();
    form.set_field("Age", "45").unwrap();
    form.set_field("Salt_Intake", "8.5").unwrap();
    form.set_field("Stress_Score", "6").unwrap();
    form.set_field("Sleep_Duration", "7").unwrap();
    form.set_field("BMI", "26.5").unwrap();
    form.set_field("Exercise_Level", "Moderate").unwrap();
    form
}

#[test]
fn defaults_match_catalog() {
    let form = FormState::new();
    assert_eq!(form.value("BP_History"), Some("Normal"));
    assert_eq!(form.value("Medication"), Some("None"));
    assert_eq!(form.value("Family_History"), Some("No"));
    assert_eq!(form.value("Exercise_Level"), Some("Low"));
    assert_eq!(form.value("Smoking_Status"), Some("Non-Smoker"));
    // Numeric fields force explicit entry.
    assert_eq!(form.value("Age"), Some(""));
    assert_eq!(form.value("BMI"), Some(""));
    assert!(!form.is_complete());
}

#[test]
fn unknown_field_is_rejected() {
    let mut form = FormState::new();
    let err = form.set_field("Weight", "80").unwrap_err();
    assert_eq!(err, FormError::UnknownField("Weight".to_string()));
    assert_eq!(form.value("Weight"), None);
}

#[test]
fn editing_tolerates_transiently_invalid_values() {
    let mut form = FormState::new();
    // Mid-typing states are stored as-is; only snapshot() validates.
    form.set_field("BMI", "2").unwrap();
    form.set_field("BMI", "26.").unwrap();
    assert_eq!(form.value("BMI"), Some("26."));
    form.set_field("BMI", "26.5").unwrap();
    assert_eq!(form.value("BMI"), Some("26.5"));
}

#[test]
fn snapshot_requires_every_numeric_field() {
    for field in FIELDS.iter().filter(|spec| spec.kind.is_numeric()) {
        let mut form = filled_form();
        form.set_field(field.name, "").unwrap();
        let err = form.snapshot().unwrap_err();
        assert_eq!(err, FormError::MissingValue { field: field.name });
    }
}

#[test]
fn snapshot_rejects_non_numeric_input() {
    for field in FIELDS.iter().filter(|spec| spec.kind.is_numeric()) {
        let mut form = filled_form();
        form.set_field(field.name, "abc").unwrap();
        let err = form.snapshot().unwrap_err();
        assert!(
            matches!(err, FormError::InvalidNumber { field: name, .. } if name == field.name),
            "{}: {err}",
            field.name
        );
    }
}

#[test]
fn integer_fields_reject_decimals() {
    let mut form = filled_form();
    form.set_field("Age", "45.5").unwrap();
    assert!(matches!(
        form.snapshot().unwrap_err(),
        FormError::InvalidNumber { field: "Age", .. }
    ));
}

#[test]
fn snapshot_rejects_values_outside_choice_sets() {
    for field in FIELDS.iter().filter(|spec| !spec.kind.is_numeric()) {
        let mut form = filled_form();
        form.set_field(field.name, "Sometimes").unwrap();
        let err = form.snapshot().unwrap_err();
        assert!(
            matches!(err, FormError::InvalidChoice { field: name, .. } if name == field.name),
            "{}: {err}",
            field.name
        );
    }
}

#[test]
fn cleared_choice_field_blocks_submission() {
    let mut form = filled_form();
    form.set_field("Medication", "").unwrap();
    assert_eq!(
        form.snapshot().unwrap_err(),
        FormError::MissingValue {
            field: "Medication"
        }
    );
}

#[test]
fn choice_values_are_case_sensitive() {
    let mut form = filled_form();
    form.set_field("Smoking_Status", "non-smoker").unwrap();
    assert!(matches!(
        form.snapshot().unwrap_err(),
        FormError::InvalidChoice {
            field: "Smoking_Status",
            ..
        }
    ));
}

#[test]
fn snapshot_reports_the_failing_field() {
    let mut form = filled_form();
    form.set_field("Sleep_Duration", "lots").unwrap();
    let err = form.snapshot().unwrap_err();
    assert_eq!(err.field(), Some("Sleep_Duration"));
}

#[test]
fn valid_form_produces_typed_snapshot() {
    let snapshot = filled_form().snapshot().expect("valid form");
    assert_eq!(snapshot.age, 45);
    assert!((snapshot.salt_intake - 8.5).abs() < f64::EPSILON);
    assert_eq!(snapshot.stress_score, 6);
    assert_eq!(snapshot.bp_history, "Normal");
    assert_eq!(snapshot.exercise_level, "Moderate");
    assert_eq!(snapshot.smoking_status, "Non-Smoker");
}

#[test]
fn payload_round_trip_has_exactly_ten_fields() {
    let snapshot = filled_form().snapshot().expect("valid form");
    let value = serde_json::to_value(&snapshot).expect("serialize snapshot");
    let object = value.as_object().expect("json object");

    assert_eq!(object.len(), FIELDS.len());
    for field in &FIELDS {
        assert!(object.contains_key(field.name), "missing {}", field.name);
    }
    // Numerics go out as JSON numbers, choices as strings.
    assert!(object["Age"].is_i64());
    assert!(object["Salt_Intake"].is_f64());
    assert!(object["BP_History"].is_string());
    assert_eq!(object["Sleep_Duration"], serde_json::json!(7.0));
}

#[test]
fn reset_restores_defaults() {
    let mut form = filled_form();
    form.reset();
    assert_eq!(form, FormState::new());
}
