//! Mutable form state with deferred validation.

use std::collections::BTreeMap;

use tracing::trace;

use hrp_model::{FIELDS, FieldKind, field_spec};

use crate::error::{FormError, Result};
use crate::snapshot::FormSnapshot;

/// Holds the raw string value of every intake field.
///
/// Editing never validates: a numeric field may hold `"4."` or `""` mid-typing,
/// mirroring native numeric input widgets. All checks run at
/// [`snapshot`](Self::snapshot) time, and only a snapshot that passes them can
/// reach the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    /// Fresh form: choice fields seeded with their defaults, numeric fields
    /// empty.
    #[must_use]
    pub fn new() -> Self {
        let values = FIELDS
            .iter()
            .map(|spec| (spec.name, spec.default.unwrap_or("").to_string()))
            .collect();
        Self { values }
    }

    /// Store a raw value for a field without validating it.
    ///
    /// # Errors
    ///
    /// `FormError::UnknownField` when the name is not in the catalog; the
    /// wire contract is exactly ten fields and the map never grows.
    pub fn set_field(&mut self, name: &str, raw: impl Into<String>) -> Result<()> {
        let spec =
            field_spec(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        trace!(field = spec.name, "field updated");
        self.values.insert(spec.name, raw.into());
        Ok(())
    }

    /// Current raw value of a field, or `None` for names outside the catalog.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Restore the default state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True when every field holds a non-empty raw value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.values().all(|raw| !raw.trim().is_empty())
    }

    /// Validate every field and assemble the immutable submission payload.
    ///
    /// Numeric fields must be non-empty and parse to their declared type;
    /// choice fields must hold one of their allowed literals. Advisory ranges
    /// are not re-checked here (the service re-validates them).
    ///
    /// # Errors
    ///
    /// The first failing field's [`FormError`], which blocks submission.
    pub fn snapshot(&self) -> Result<FormSnapshot> {
        Ok(FormSnapshot {
            age: self.integer("Age")?,
            salt_intake: self.decimal("Salt_Intake")?,
            stress_score: self.integer("Stress_Score")?,
            bp_history: self.choice("BP_History")?,
            sleep_duration: self.decimal("Sleep_Duration")?,
            bmi: self.decimal("BMI")?,
            medication: self.choice("Medication")?,
            family_history: self.choice("Family_History")?,
            exercise_level: self.choice("Exercise_Level")?,
            smoking_status: self.choice("Smoking_Status")?,
        })
    }

    fn raw(&self, field: &'static str) -> Result<&str> {
        let raw = self.values.get(field).map_or("", String::as_str).trim();
        if raw.is_empty() {
            return Err(FormError::MissingValue { field });
        }
        Ok(raw)
    }

    fn integer(&self, field: &'static str) -> Result<i64> {
        let raw = self.raw(field)?;
        raw.parse().map_err(|_| FormError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
    }

    fn decimal(&self, field: &'static str) -> Result<f64> {
        let raw = self.raw(field)?;
        raw.parse().map_err(|_| FormError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
    }

    fn choice(&self, field: &'static str) -> Result<String> {
        let raw = self.raw(field)?;
        let allowed: &[&str] = match field_spec(field).map(|spec| spec.kind) {
            Some(FieldKind::Choice { allowed }) => allowed,
            _ => &[],
        };
        if allowed.contains(&raw) {
            Ok(raw.to_string())
        } else {
            Err(FormError::InvalidChoice {
                field,
                value: raw.to_string(),
            })
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
