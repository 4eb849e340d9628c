use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::User.as_str(), "USER");
    assert_eq!(Role::Host.as_str(), "HOST");
    assert_eq!(Role::Admin.as_str(), "ADMIN");
}

#[test]
fn test_role_from_str_roundtrips_every_role() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    let result = Role::from_str("admin");
    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn test_role_serializes_uppercase() {
    let json = serde_json::to_string(&Role::Host).unwrap();
    assert_eq!(json, "\"HOST\"");
}
