pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    dashboard::DashboardShell,
    error::ApiError,
    error::Result as ApiResult,
    extractors::session::Session,
    form_response::{respond, session_cookies},
};
pub use app_state::AppState;
pub use error::ServerError;

pub use crate::routes::build_router;
