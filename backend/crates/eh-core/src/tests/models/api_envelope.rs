use crate::{ApiEnvelope, Role};

use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
struct Login {
    role: Role,
    email: String,
}

fn envelope(data: Option<Value>) -> ApiEnvelope {
    ApiEnvelope {
        success: true,
        message: "ok".to_string(),
        data,
        meta: None,
    }
}

#[test]
fn test_data_as_decodes_matching_shape() {
    let env = envelope(Some(json!({"role": "HOST", "email": "host@example.com"})));

    let login = env.data_as::<Login>().unwrap().unwrap();
    assert_eq!(login.role, Role::Host);
    assert_eq!(login.email, "host@example.com");
}

#[test]
fn test_data_as_without_data_is_none() {
    assert!(envelope(None).data_as::<Login>().unwrap().is_none());
    assert!(envelope(Some(Value::Null)).data_as::<Login>().unwrap().is_none());
}

#[test]
fn test_data_as_reports_wrong_shape() {
    let env = envelope(Some(json!({"role": "HOST"})));

    let err = env.data_as::<Login>().unwrap_err();
    assert!(err.to_string().contains("email"));
}
