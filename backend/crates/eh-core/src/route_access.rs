//! Route access rules shared by the route guard and post-login redirects.

use crate::{Role, default_dashboard_route};

use serde::Serialize;

pub const LOGIN_ROUTE: &str = "/login";

const AUTH_ROUTES: &[&str] = &["/login", "/register", "/forgot-password", "/reset-password"];
const COMMON_PROTECTED_ROUTES: &[&str] = &["/my-profile", "/change-password"];
const ROLE_PREFIXES: &[(&str, Role)] = &[
    ("/admin/dashboard", Role::Admin),
    ("/host/dashboard", Role::Host),
    ("/dashboard", Role::User),
];

/// Who may visit a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteOwner {
    /// Anyone
    Public,
    /// Sign-in pages, only meaningful to signed-out visitors
    Auth,
    /// Any signed-in person
    Common,
    /// Signed-in persons of one role
    Role(Role),
}

/// What the guard wants done with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Classify `path` (query string ignored)
pub fn route_owner(path: &str) -> RouteOwner {
    let path = strip_query(path);

    if AUTH_ROUTES.iter().any(|r| matches_route(path, r)) {
        return RouteOwner::Auth;
    }
    if COMMON_PROTECTED_ROUTES
        .iter()
        .any(|r| matches_route(path, r))
    {
        return RouteOwner::Common;
    }
    ROLE_PREFIXES
        .iter()
        .find(|(prefix, _)| matches_route(path, prefix))
        .map(|(_, role)| RouteOwner::Role(*role))
        .unwrap_or(RouteOwner::Public)
}

/// Whether a post-login redirect target is acceptable for `role`.
///
/// Only same-site absolute paths qualify; sign-in pages and other roles'
/// dashboards are refused.
pub fn is_valid_redirect_for_role(path: &str, role: Role) -> bool {
    if !is_plain_absolute_path(path) {
        return false;
    }

    match route_owner(path) {
        RouteOwner::Public | RouteOwner::Common => true,
        RouteOwner::Auth => false,
        RouteOwner::Role(owner) => owner == role,
    }
}

/// Decide whether a visitor with `role` (None = signed out) may see `path`
pub fn guard(path: &str, role: Option<Role>) -> GuardDecision {
    match (route_owner(path), role) {
        (RouteOwner::Public, _) | (RouteOwner::Auth, None) => GuardDecision::Allow,
        (RouteOwner::Auth, Some(role)) => {
            GuardDecision::Redirect(default_dashboard_route(role).to_string())
        }
        (RouteOwner::Common | RouteOwner::Role(_), None) => {
            GuardDecision::Redirect(login_redirect(path))
        }
        (RouteOwner::Common, Some(_)) => GuardDecision::Allow,
        (RouteOwner::Role(owner), Some(role)) if owner == role => GuardDecision::Allow,
        (RouteOwner::Role(_), Some(role)) => {
            GuardDecision::Redirect(default_dashboard_route(role).to_string())
        }
    }
}

/// Login URL that sends the visitor back to `path` afterwards
pub fn login_redirect(path: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(path.as_bytes()).collect();
    format!("{}?redirect={}", LOGIN_ROUTE, encoded)
}

/// Absolute path with no control characters and no dot segments.
///
/// Browsers drop tab, CR and LF while parsing a `Location`, so `/\t/host`
/// becomes the scheme-relative `//host`.
fn is_plain_absolute_path(path: &str) -> bool {
    if !path.starts_with('/') || path.starts_with("//") {
        return false;
    }
    if path.chars().any(|c| c == '\\' || c.is_ascii_control()) {
        return false;
    }

    !strip_query(path).split('/').any(is_dot_segment)
}

fn is_dot_segment(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase().replace("%2e", ".");
    segment == "." || segment == ".."
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

fn matches_route(path: &str, route: &str) -> bool {
    path == route
        || path
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}
