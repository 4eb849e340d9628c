pub mod error;
pub mod models;
pub mod navigation;
pub mod route_access;

pub use error::{CoreError, Result};
pub use models::action_result::{ActionResult, FieldError, FormData};
pub use models::api_envelope::{ApiEnvelope, ApiMeta};
pub use models::event_status::EventStatus;
pub use models::host_application_status::HostApplicationStatus;
pub use models::person::Person;
pub use models::person_status::PersonStatus;
pub use models::profile::Profile;
pub use models::role::Role;
pub use navigation::{
    NavItem, NavSection, default_dashboard_route, default_dashboard_route_by_name,
    nav_sections_by_role_name, nav_sections_for,
};
pub use route_access::{
    GuardDecision, LOGIN_ROUTE, RouteOwner, guard, is_valid_redirect_for_role, login_redirect,
    route_owner,
};

#[cfg(test)]
mod tests;
