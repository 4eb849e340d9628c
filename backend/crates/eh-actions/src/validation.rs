//! Form schemas and the field rules they are built from.

use crate::{ActionOutcome, Step};

use eh_core::{ActionResult, FieldError, FormData};

use chrono::{NaiveDate, NaiveTime};
use log::debug;
use serde::Serialize;
use serde_json::Value;

pub const VALIDATION_FAILED: &str = "Validation failed";

/// A typed form decoded once at the boundary.
///
/// `validate` yields the normalized backend payload or one error per
/// violated field.
pub trait FormSchema: Serialize {
    type Payload;

    fn validate(&self) -> Result<Self::Payload, Vec<FieldError>>;

    /// Submitted values, echoed back so the form can be re-populated
    fn form_data(&self) -> FormData {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => FormData::new(),
        }
    }

    /// Validate, turning a rejection into a finished outcome
    fn validated(&self) -> Step<Self::Payload> {
        self.validate().map_err(|errors| {
            debug!(
                "Form rejected on fields {:?}",
                errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>()
            );
            ActionOutcome::Error(ActionResult::rejected(
                VALIDATION_FAILED,
                errors,
                self.form_data(),
            ))
        })
    }
}

/// Accumulates field errors, keeping only the first failure per field
#[derive(Debug, Default)]
pub struct FormValidator {
    errors: Vec<FieldError>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` against `field` unless `ok`
    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> bool {
        if !ok && !self.has_error(field) {
            self.errors.push(FieldError::new(field, message));
        }
        ok
    }

    pub fn required(&mut self, field: &str, value: &str, message: &str) -> bool {
        self.check(field, !value.trim().is_empty(), message)
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) -> bool {
        self.check(field, value.trim().chars().count() >= min, message)
    }

    pub fn email(&mut self, field: &str, value: &str) -> bool {
        self.check(field, is_email(value.trim()), "Invalid email address")
    }

    /// Id used as a backend path segment
    pub fn identifier(&mut self, field: &str, value: &str, label: &str) -> bool {
        let value = value.trim();
        if !self.required(field, value, &format!("{} is required", label)) {
            return false;
        }
        self.check(
            field,
            value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            &format!("{} is invalid", label),
        )
    }

    /// Whole number within `min..=max`
    pub fn integer(
        &mut self,
        field: &str,
        value: &str,
        min: i64,
        max: Option<i64>,
        message: &str,
    ) -> Option<i64> {
        let parsed = value.trim().parse::<i64>().ok();
        let ok = parsed.is_some_and(|n| n >= min && max.is_none_or(|max| n <= max));
        if self.check(field, ok, message) {
            parsed
        } else {
            None
        }
    }

    /// Finite decimal no smaller than `min`
    pub fn number(&mut self, field: &str, value: &str, min: f64, message: &str) -> Option<f64> {
        let parsed = value.trim().parse::<f64>().ok().filter(|n| n.is_finite());
        let ok = parsed.is_some_and(|n| n >= min);
        if self.check(field, ok, message) {
            parsed
        } else {
            None
        }
    }

    /// Calendar date written `YYYY-MM-DD`
    pub fn date(&mut self, field: &str, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        let parsed = (value.len() == 10)
            .then(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
            .flatten();
        self.check(
            field,
            parsed.is_some(),
            "Date must be in YYYY-MM-DD format",
        );
        parsed
    }

    /// Time of day written `HH:MM`
    pub fn time(&mut self, field: &str, value: &str) -> Option<NaiveTime> {
        let value = value.trim();
        let parsed = (value.len() == 5)
            .then(|| NaiveTime::parse_from_str(value, "%H:%M").ok())
            .flatten();
        self.check(field, parsed.is_some(), "Time must be in HH:MM format");
        parsed
    }

    /// Hand back `payload` when nothing failed
    pub fn finish<T>(self, payload: impl FnOnce() -> T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(payload())
        } else {
            Err(self.errors)
        }
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Trimmed value, or `None` when blank
pub fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

