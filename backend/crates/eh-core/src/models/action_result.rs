//! Result shape handed back to a submitting form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Submitted form values echoed back for re-population
pub type FormData = Map<String, Value>;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Normalized outcome of one form submission.
///
/// Created fresh per submission and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_data: Option<FormData>,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
            form_data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
            form_data: None,
        }
    }

    /// Failure carrying field errors and the submitted values
    pub fn rejected(
        message: impl Into<String>,
        errors: Vec<FieldError>,
        form_data: FormData,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
            form_data: Some(form_data),
        }
    }

    /// First error reported for `field`
    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors
            .as_deref()
            .and_then(|errors| errors.iter().find(|e| e.field == field))
    }

    pub fn has_error_for(&self, field: &str) -> bool {
        self.error_for(field).is_some()
    }
}
