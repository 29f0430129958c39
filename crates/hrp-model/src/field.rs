//! Static catalog of patient intake fields.
//!
//! The prediction service accepts exactly ten parameters. Each one is
//! described here by a [`FieldSpec`]: its wire name, a human-readable label,
//! its value domain, and its default. The catalog is fixed at compile time;
//! there is no loader or registry layer.
//!
//! Numeric ranges and steps are **advisory**: they drive help text and the
//! field listing, but submission-time validation only requires that a value
//! is present and parses to the declared type. Range enforcement is the
//! service's responsibility.

use std::fmt;

/// Value domain for a single intake field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Whole-number field with an advisory inclusive range.
    Integer { min: i64, max: i64 },
    /// Decimal field with an advisory inclusive range and input step.
    Decimal { min: f64, max: f64, step: f64 },
    /// Choice field restricted to a fixed set of literal values.
    Choice { allowed: &'static [&'static str] },
}

impl FieldKind {
    /// Short type name for display.
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        match self {
            Self::Integer { .. } => "integer",
            Self::Decimal { .. } => "decimal",
            Self::Choice { .. } => "choice",
        }
    }

    /// Whether this field expects a numeric value.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer { .. } | Self::Decimal { .. })
    }

    /// Advisory range or allowed-value listing for display.
    #[must_use]
    pub fn domain_label(&self) -> String {
        match self {
            Self::Integer { min, max } => format!("{min}\u{2013}{max}"),
            Self::Decimal { min, max, .. } => format!("{min}\u{2013}{max}"),
            Self::Choice { allowed } => allowed.join(" | "),
        }
    }
}

/// Static description of one intake field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire name, exactly as submitted to the prediction service.
    pub name: &'static str,
    /// Human-readable label, including units where applicable.
    pub label: &'static str,
    /// Value domain.
    pub kind: FieldKind,
    /// Pre-selected value for choice fields. Numeric fields start empty,
    /// forcing explicit entry.
    pub default: Option<&'static str>,
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind.type_label())
    }
}

/// The ten intake fields, in submission order.
pub static FIELDS: [FieldSpec; 10] = [
    FieldSpec {
        name: "Age",
        label: "Age (years)",
        kind: FieldKind::Integer { min: 18, max: 100 },
        default: None,
    },
    FieldSpec {
        name: "Salt_Intake",
        label: "Salt Intake (grams per day)",
        kind: FieldKind::Decimal {
            min: 0.0,
            max: 20.0,
            step: 0.1,
        },
        default: None,
    },
    FieldSpec {
        name: "Stress_Score",
        label: "Stress Score (1-10)",
        kind: FieldKind::Integer { min: 1, max: 10 },
        default: None,
    },
    FieldSpec {
        name: "BP_History",
        label: "Blood Pressure History",
        kind: FieldKind::Choice {
            allowed: &["Normal", "High", "Low"],
        },
        default: Some("Normal"),
    },
    FieldSpec {
        name: "Sleep_Duration",
        label: "Sleep Duration (hours per night)",
        kind: FieldKind::Decimal {
            min: 3.0,
            max: 12.0,
            step: 0.5,
        },
        default: None,
    },
    FieldSpec {
        name: "BMI",
        label: "BMI (kg/m\u{b2})",
        kind: FieldKind::Decimal {
            min: 15.0,
            max: 50.0,
            step: 0.1,
        },
        default: None,
    },
    FieldSpec {
        name: "Medication",
        label: "Current Medication",
        kind: FieldKind::Choice {
            allowed: &["None", "Yes"],
        },
        default: Some("None"),
    },
    FieldSpec {
        name: "Family_History",
        label: "Family History of Hypertension",
        kind: FieldKind::Choice {
            allowed: &["No", "Yes"],
        },
        default: Some("No"),
    },
    FieldSpec {
        name: "Exercise_Level",
        label: "Exercise Level",
        kind: FieldKind::Choice {
            allowed: &["Low", "Moderate", "High"],
        },
        default: Some("Low"),
    },
    FieldSpec {
        name: "Smoking_Status",
        label: "Smoking Status",
        kind: FieldKind::Choice {
            allowed: &["Non-Smoker", "Smoker"],
        },
        default: Some("Non-Smoker"),
    },
];

/// Look up a field spec by its wire name.
#[must_use]
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_wire_name() {
        let spec = field_spec("Salt_Intake").expect("known field");
        assert_eq!(spec.label, "Salt Intake (grams per day)");
        assert!(spec.kind.is_numeric());
        assert!(field_spec("salt_intake").is_none());
        assert!(field_spec("Weight").is_none());
    }

    #[test]
    fn choice_fields_carry_defaults() {
        for spec in &FIELDS {
            match spec.kind {
                FieldKind::Choice { allowed } => {
                    let default = spec.default.expect("choice fields have a default");
                    assert!(allowed.contains(&default), "{} default", spec.name);
                }
                _ => assert!(spec.default.is_none(), "{} starts empty", spec.name),
            }
        }
    }
}
