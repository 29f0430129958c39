//! Property tests for snapshot-time validation.

use proptest::prelude::*;

use hrp_form::{FormError, FormState};

fn valid_form() -> FormState {
    let mut form = FormState::new();
    form.set_field("Age", "45").unwrap();
    form.set_field("Salt_Intake", "8.5").unwrap();
    form.set_field("Stress_Score", "6").unwrap();
    form.set_field("Sleep_Duration", "7").unwrap();
    form.set_field("BMI", "26.5").unwrap();
    form
}

proptest! {
    #[test]
    fn any_in_range_age_is_accepted(age in 18i64..=100) {
        let mut form = valid_form();
        form.set_field("Age", age.to_string()).unwrap();
        let snapshot = form.snapshot().expect("in-range integer");
        prop_assert_eq!(snapshot.age, age);
    }

    #[test]
    fn any_parseable_decimal_is_accepted(bmi in 15.0f64..=50.0) {
        let mut form = valid_form();
        form.set_field("BMI", bmi.to_string()).unwrap();
        let snapshot = form.snapshot().expect("parseable decimal");
        prop_assert!((snapshot.bmi - bmi).abs() < 1e-9);
    }

    #[test]
    fn unparseable_numeric_input_is_rejected(raw in "[a-zA-Z ._-]{1,12}") {
        prop_assume!(raw.trim().parse::<f64>().is_err());
        prop_assume!(!raw.trim().is_empty());
        let mut form = valid_form();
        form.set_field("Salt_Intake", raw.as_str()).unwrap();
        let err = form.snapshot().unwrap_err();
        let matched = matches!(
            err,
            FormError::InvalidNumber { field: "Salt_Intake", .. }
        );
        prop_assert!(matched);
    }

    #[test]
    fn values_outside_the_choice_set_are_rejected(raw in "[A-Za-z]{1,16}") {
        prop_assume!(!matches!(raw.as_str(), "Normal" | "High" | "Low"));
        let mut form = valid_form();
        form.set_field("BP_History", raw.as_str()).unwrap();
        let err = form.snapshot().unwrap_err();
        let matched = matches!(
            err,
            FormError::InvalidChoice { field: "BP_History", .. }
        );
        prop_assert!(matched);
    }
}
