//! Dashboard shell: the signed-in person plus the sidebar built for their role

use crate::{AppState, ApiResult, api::extractors::session::Session, respond};

use eh_actions::{ActionOutcome, Redirect as SessionRedirect, SessionUpdate, profile::my_info};
use eh_core::{LOGIN_ROUTE, NavSection, Person, default_dashboard_route, nav_sections_for};

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardShell {
    pub display_name: String,
    pub person: Person,
    pub nav_sections: Vec<NavSection>,
    pub default_route: &'static str,
}

impl DashboardShell {
    /// Navigation follows the role the backend reports for the person
    pub fn for_person(person: Person) -> Self {
        let role = person.role;
        Self {
            display_name: person.display_name().to_string(),
            person,
            nav_sections: nav_sections_for(role),
            default_route: default_dashboard_route(role),
        }
    }
}

/// GET /dashboard/shell
///
/// Signed-out visitors and sessions the backend no longer honours are
/// sent to the login page. Blocked or deleted persons also lose their
/// session cookies, so the guard treats them as signed out from then on.
pub async fn dashboard_shell(
    State(state): State<AppState>,
    Session(session): Session,
) -> ApiResult<Response> {
    let Some(token) = session
        .access_token()
        .filter(|_| session.is_authenticated())
    else {
        return Ok(Redirect::to(LOGIN_ROUTE).into_response());
    };

    let person = match my_info(&state.client, token).await {
        Ok(Some(person)) => person,
        Ok(None) => {
            log::warn!("{} has no person record", session.log_label());
            return Ok(Redirect::to(LOGIN_ROUTE).into_response());
        }
        Err(e) if e.is_unauthorized() => {
            log::info!("{} rejected by backend: {}", session.log_label(), e);
            return Ok(Redirect::to(LOGIN_ROUTE).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    if !person.profile_matches_role() {
        log::warn!(
            "Person {} has no {} profile matching {}",
            person.id,
            person.role,
            person.email
        );
    }

    if !person.is_active() {
        log::info!(
            "{} belongs to inactive person {} ({})",
            session.log_label(),
            person.id,
            person.status
        );
        let sign_out = SessionRedirect::with_session(LOGIN_ROUTE, SessionUpdate::Clear);
        return Ok(respond(ActionOutcome::Redirect(sign_out), &state.cookies));
    }

    Ok(Json(DashboardShell::for_person(person)).into_response())
}
