use crate::{
    AppState,
    api::{actions, dashboard, guard},
    health, metrics,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(metrics::metrics_handler))
        // Dashboard
        .route("/dashboard/shell", get(dashboard::dashboard_shell))
        .route("/guard", get(guard::check_route))
        // Form actions
        .nest("/actions", action_routes())
        // Checkout return page
        .route("/payment/success", get(actions::payment_success))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(actions::register))
        .route("/login", post(actions::login))
        .route("/logout", post(actions::logout))
        .route("/change-password", post(actions::change_password))
        .route("/forgot-password", post(actions::forgot_password))
        .route("/reset-password", post(actions::reset_password))
        .route("/profile", post(actions::update_profile))
        .route("/events/create", post(actions::create_event))
        .route("/events/update", post(actions::update_event))
        .route("/events/delete", post(actions::delete_event))
        .route("/events/status", post(actions::update_event_status))
        .route("/events/join", post(actions::join_event))
        .route("/events/leave", post(actions::leave_event))
        .route("/reviews", post(actions::create_review))
        .route("/host-applications/apply", post(actions::apply_for_host))
        .route(
            "/host-applications/cancel",
            post(actions::cancel_host_application),
        )
        .route(
            "/host-applications/review",
            post(actions::review_host_application),
        )
        .route(
            "/admin/persons/status",
            post(actions::update_person_status),
        )
        .route("/admin/persons/delete", post(actions::soft_delete_person))
}
