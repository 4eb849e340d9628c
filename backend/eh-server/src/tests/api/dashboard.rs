use crate::DashboardShell;

use eh_core::{Person, Role};

use serde_json::json;

fn host_person() -> Person {
    serde_json::from_value(json!({
        "id": "host-1",
        "email": "host@example.com",
        "role": "HOST",
        "status": "ACTIVE",
        "createdAt": "2026-01-01T00:00:00Z",
        "updatedAt": "2026-01-01T00:00:00Z",
        "host": { "name": "Harbor Events", "email": "host@example.com" }
    }))
    .unwrap()
}

#[test]
fn test_shell_uses_role_default_route() {
    let shell = DashboardShell::for_person(host_person());

    assert_eq!(shell.person.role, Role::Host);
    assert_eq!(shell.default_route, "/host/dashboard");
}

#[test]
fn test_shell_navigation_matches_role() {
    let shell = DashboardShell::for_person(host_person());

    let hrefs: Vec<&str> = shell
        .nav_sections
        .iter()
        .flat_map(|s| s.items.iter().map(|i| i.href))
        .collect();

    assert!(hrefs.contains(&"/host/dashboard"));
    assert!(hrefs.contains(&"/host/dashboard/my-events"));
    assert!(!hrefs.contains(&"/dashboard/payments"));
}

#[test]
fn test_shell_serializes_camel_case() {
    let json = serde_json::to_value(DashboardShell::for_person(host_person())).unwrap();

    assert_eq!(json["defaultRoute"], "/host/dashboard");
    assert_eq!(json["displayName"], "Harbor Events");
    assert!(json["navSections"].is_array());
    assert_eq!(json["person"]["email"], "host@example.com");
}
