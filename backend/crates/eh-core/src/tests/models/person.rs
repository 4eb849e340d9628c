use crate::{Person, PersonStatus, Role};

use serde_json::json;

fn host_person_json() -> serde_json::Value {
    json!({
        "id": "p-1",
        "email": "host@example.com",
        "role": "HOST",
        "status": "ACTIVE",
        "isDeleted": false,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-02T00:00:00Z",
        "host": {
            "name": "Hana Host",
            "email": "host@example.com",
            "contactNumber": "+123456"
        }
    })
}

#[test]
fn test_person_deserializes_backend_shape() {
    let person: Person = serde_json::from_value(host_person_json()).unwrap();

    assert_eq!(person.role, Role::Host);
    assert_eq!(person.status, PersonStatus::Active);
    assert_eq!(person.display_name(), "Hana Host");
    assert!(person.is_active());
    assert!(person.profile_matches_role());
}

#[test]
fn test_profile_with_other_email_does_not_match() {
    let mut value = host_person_json();
    value["host"]["email"] = json!("someone-else@example.com");
    let person: Person = serde_json::from_value(value).unwrap();

    assert!(!person.profile_matches_role());
}

#[test]
fn test_profile_of_other_role_does_not_match() {
    let mut value = host_person_json();
    value["user"] = json!({ "name": "Extra", "email": "host@example.com" });
    let person: Person = serde_json::from_value(value).unwrap();

    assert!(!person.profile_matches_role());
}

#[test]
fn test_missing_profile_falls_back_to_email() {
    let mut value = host_person_json();
    value.as_object_mut().unwrap().remove("host");
    let person: Person = serde_json::from_value(value).unwrap();

    assert_eq!(person.display_name(), "host@example.com");
    assert!(!person.profile_matches_role());
}

#[test]
fn test_blocked_or_deleted_person_is_not_active() {
    let mut value = host_person_json();
    value["status"] = json!("BLOCKED");
    let blocked: Person = serde_json::from_value(value.clone()).unwrap();
    assert!(!blocked.is_active());

    value["status"] = json!("ACTIVE");
    value["isDeleted"] = json!(true);
    let deleted: Person = serde_json::from_value(value).unwrap();
    assert!(!deleted.is_active());
}
