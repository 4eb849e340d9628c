use crate::{ActionResult, FieldError, FormData};

use serde_json::json;

#[test]
fn test_success_omits_optional_fields() {
    let result = ActionResult::success("Saved");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json, json!({ "success": true, "message": "Saved" }));
}

#[test]
fn test_rejected_serializes_camel_case() {
    let mut form = FormData::new();
    form.insert("email".into(), json!("not-an-email"));
    let result = ActionResult::rejected(
        "Validation failed",
        vec![FieldError::new("email", "Invalid email address")],
        form,
    );
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["field"], "email");
    assert_eq!(json["formData"]["email"], "not-an-email");
}

#[test]
fn test_error_for_finds_field() {
    let result = ActionResult::rejected(
        "Validation failed",
        vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("password", "Password is required"),
        ],
        FormData::new(),
    );

    assert_eq!(
        result.error_for("password").map(|e| e.message.as_str()),
        Some("Password is required")
    );
    assert!(!result.has_error_for("email"));
}
