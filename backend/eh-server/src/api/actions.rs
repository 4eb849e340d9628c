//! Form action endpoints
//!
//! Each handler binds the request session to an [`ActionContext`], runs one
//! action and renders its outcome. URL-encoded forms decode through `Form`,
//! forms with an image upload through multipart.

use crate::{
    AppState, ApiResult,
    api::{extractors::session::Session, form_response::respond, multipart_form::read_multipart},
};

use eh_actions::{
    admin::{self, PersonStatusForm, SoftDeletePersonForm},
    auth::{
        self, ChangePasswordForm, ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm,
    },
    events::{self, CreateEventForm, DeleteEventForm, EventStatusForm, UpdateEventForm},
    host_applications::{
        self, ApplyForHostForm, CancelHostApplicationForm, ReviewHostApplicationForm,
    },
    participation::{self, JoinEventForm, LeaveEventForm},
    payments::{self, VerifyPaymentForm},
    profile::{self, UpdateProfileForm},
    reviews::{self, CreateReviewForm},
};

use axum::{
    Form,
    extract::{Multipart, Query, State},
    response::Response,
};

// =============================================================================
// Authentication
// =============================================================================

/// POST /actions/register
pub async fn register(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<RegisterForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(auth::register_user(&ctx, form).await, &state.cookies)
}

/// POST /actions/login
pub async fn login(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(auth::login(&ctx, form).await, &state.cookies)
}

/// POST /actions/logout
pub async fn logout(State(state): State<AppState>, Session(session): Session) -> Response {
    let ctx = state.action_context(session);
    respond(auth::logout(&ctx).await, &state.cookies)
}

/// POST /actions/change-password
pub async fn change_password(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<ChangePasswordForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(auth::change_password(&ctx, form).await, &state.cookies)
}

/// POST /actions/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<ForgotPasswordForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(auth::forgot_password(&ctx, form).await, &state.cookies)
}

/// POST /actions/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<ResetPasswordForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(auth::reset_password(&ctx, form).await, &state.cookies)
}

// =============================================================================
// Profile
// =============================================================================

/// POST /actions/profile (multipart)
pub async fn update_profile(
    State(state): State<AppState>,
    Session(session): Session,
    multipart: Multipart,
) -> ApiResult<Response> {
    let (form, file) = read_multipart::<UpdateProfileForm>(multipart).await?;
    let ctx = state.action_context(session);
    Ok(respond(
        profile::update_profile(&ctx, form, file).await,
        &state.cookies,
    ))
}

// =============================================================================
// Events
// =============================================================================

/// POST /actions/events/create (multipart)
pub async fn create_event(
    State(state): State<AppState>,
    Session(session): Session,
    multipart: Multipart,
) -> ApiResult<Response> {
    let (form, file) = read_multipart::<CreateEventForm>(multipart).await?;
    let ctx = state.action_context(session);
    Ok(respond(
        events::create_event(&ctx, form, file).await,
        &state.cookies,
    ))
}

/// POST /actions/events/update (multipart)
pub async fn update_event(
    State(state): State<AppState>,
    Session(session): Session,
    multipart: Multipart,
) -> ApiResult<Response> {
    let (form, file) = read_multipart::<UpdateEventForm>(multipart).await?;
    let ctx = state.action_context(session);
    Ok(respond(
        events::update_event(&ctx, form, file).await,
        &state.cookies,
    ))
}

/// POST /actions/events/delete
pub async fn delete_event(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<DeleteEventForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(events::delete_event(&ctx, form).await, &state.cookies)
}

/// POST /actions/events/status
pub async fn update_event_status(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<EventStatusForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(events::update_event_status(&ctx, form).await, &state.cookies)
}

// =============================================================================
// Participation & payments
// =============================================================================

/// POST /actions/events/join
pub async fn join_event(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<JoinEventForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(participation::join_event(&ctx, form).await, &state.cookies)
}

/// POST /actions/events/leave
pub async fn leave_event(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<LeaveEventForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(participation::leave_event(&ctx, form).await, &state.cookies)
}

/// GET /payment/success?session_id=...
///
/// Landing page of the hosted checkout.
pub async fn payment_success(
    State(state): State<AppState>,
    Session(session): Session,
    Query(form): Query<VerifyPaymentForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(payments::verify_payment(&ctx, form).await, &state.cookies)
}

// =============================================================================
// Reviews & host applications
// =============================================================================

/// POST /actions/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<CreateReviewForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(reviews::create_review(&ctx, form).await, &state.cookies)
}

/// POST /actions/host-applications/apply
pub async fn apply_for_host(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<ApplyForHostForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(
        host_applications::apply_for_host(&ctx, form).await,
        &state.cookies,
    )
}

/// POST /actions/host-applications/cancel
pub async fn cancel_host_application(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<CancelHostApplicationForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(
        host_applications::cancel_host_application(&ctx, form).await,
        &state.cookies,
    )
}

/// POST /actions/host-applications/review
pub async fn review_host_application(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<ReviewHostApplicationForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(
        host_applications::review_host_application(&ctx, form).await,
        &state.cookies,
    )
}

// =============================================================================
// Admin moderation
// =============================================================================

/// POST /actions/admin/persons/status
pub async fn update_person_status(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<PersonStatusForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(admin::update_person_status(&ctx, form).await, &state.cookies)
}

/// POST /actions/admin/persons/delete
pub async fn soft_delete_person(
    State(state): State<AppState>,
    Session(session): Session,
    Form(form): Form<SoftDeletePersonForm>,
) -> Response {
    let ctx = state.action_context(session);
    respond(admin::soft_delete_person(&ctx, form).await, &state.cookies)
}
