//! Account actions: registration, login, logout and password management.

use crate::{
    ActionContext, ActionOutcome, FormSchema, FormValidator, Redirect, SessionUpdate, Step,
    USER_INFO_TAG, validation::non_empty,
};

use eh_auth::SessionTokens;
use eh_client::Method;
use eh_core::{FieldError, LOGIN_ROUTE, default_dashboard_route, is_valid_redirect_for_role};

use log::warn;
use serde::{Deserialize, Serialize};

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";

pub(crate) const MIN_NAME_LENGTH: usize = 2;
const MIN_PASSWORD_LENGTH: usize = 6;

const REGISTER_PATH: &str = "/user/register";
const LOGIN_PATH: &str = "/auth/login";
const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";
const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
const RESET_PASSWORD_PATH: &str = "/auth/reset-password";

const REGISTER_FAILED: &str = "Registration failed. Please try again.";
const LOGIN_FAILED: &str = "Login failed. You might have entered incorrect email or password.";
const CHANGE_PASSWORD_FAILED: &str = "Failed to change password";
const FORGOT_PASSWORD_FAILED: &str = "Failed to send password reset email";
const RESET_PASSWORD_FAILED: &str = "Failed to reset password";

// =========================================================================
// Forms
// =========================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub password: String,
    pub user: RegisterUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl FormSchema for RegisterForm {
    type Payload = RegisterPayload;

    fn validate(&self) -> Result<RegisterPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.min_len("name", &self.name, MIN_NAME_LENGTH, NAME_TOO_SHORT);
        if v.required("email", &self.email, "Email is required") {
            v.email("email", &self.email);
        }
        v.check(
            "password",
            self.password.chars().count() >= MIN_PASSWORD_LENGTH,
            PASSWORD_TOO_SHORT,
        );

        v.finish(|| RegisterPayload {
            password: self.password.clone(),
            user: RegisterUser {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                contact_number: non_empty(&self.contact_number),
                address: non_empty(&self.address),
            },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Page the visitor was sent away from, if any
    pub redirect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl FormSchema for LoginForm {
    type Payload = LoginPayload;

    fn validate(&self) -> Result<LoginPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        if v.required("email", &self.email, "Email is required") {
            v.email("email", &self.email);
        }
        v.required("password", &self.password, "Password is required");

        v.finish(|| LoginPayload {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangePasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
    pub old_password: String,
    pub new_password: String,
}

impl FormSchema for ChangePasswordForm {
    type Payload = ChangePasswordPayload;

    fn validate(&self) -> Result<ChangePasswordPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.required("oldPassword", &self.old_password, "Old password is required");
        check_new_password(
            &mut v,
            "newPassword",
            &self.new_password,
            &self.confirm_password,
        );

        v.finish(|| ChangePasswordPayload {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordPayload {
    pub email: String,
}

impl FormSchema for ForgotPasswordForm {
    type Payload = ForgotPasswordPayload;

    fn validate(&self) -> Result<ForgotPasswordPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        if v.required("email", &self.email, "Email is required") {
            v.email("email", &self.email);
        }

        v.finish(|| ForgotPasswordPayload {
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResetPasswordForm {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetPasswordPayload {
    pub token: String,
    pub password: String,
}

impl FormSchema for ResetPasswordForm {
    type Payload = ResetPasswordPayload;

    fn validate(&self) -> Result<ResetPasswordPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.required("token", &self.token, "Reset token is required");
        check_new_password(
            &mut v,
            "newPassword",
            &self.new_password,
            &self.confirm_password,
        );

        v.finish(|| ResetPasswordPayload {
            token: self.token.trim().to_string(),
            password: self.new_password.clone(),
        })
    }
}

/// Length rule on the new password, equality rule on its confirmation
fn check_new_password(v: &mut FormValidator, field: &str, password: &str, confirm: &str) {
    v.check(
        field,
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        PASSWORD_TOO_SHORT,
    );
    if v.required("confirmPassword", confirm, "Please confirm your password") {
        v.check("confirmPassword", confirm == password, PASSWORDS_DONT_MATCH);
    }
}

// =========================================================================
// Actions
// =========================================================================

/// Create an account, then sign in with the same credentials
pub async fn register_user(ctx: &ActionContext, form: RegisterForm) -> ActionOutcome {
    ctx.observe("register_user", attempt_register_user(ctx, form))
        .await
}

async fn attempt_register_user(ctx: &ActionContext, form: RegisterForm) -> Step<ActionOutcome> {
    let payload = form.validated()?;
    ctx.backend(
        ctx.client
            .send_json(Method::POST, REGISTER_PATH, None, &payload)
            .await,
        REGISTER_FAILED,
    )?;

    let login_form = LoginForm {
        email: form.email,
        password: form.password,
        redirect: String::new(),
    };
    Ok(login(ctx, login_form).await)
}

/// Exchange credentials for session tokens and send the visitor on
pub async fn login(ctx: &ActionContext, form: LoginForm) -> ActionOutcome {
    ctx.observe("login", attempt_login(ctx, form)).await
}

async fn attempt_login(ctx: &ActionContext, form: LoginForm) -> Step<ActionOutcome> {
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::POST, LOGIN_PATH, None, &payload)
            .await,
        LOGIN_FAILED,
    )?;

    let Some(access_token) = envelope.data_str("accessToken").map(str::to_string) else {
        warn!("Login answer carried no access token");
        return Err(ActionOutcome::failure(LOGIN_FAILED));
    };
    let refresh_token = envelope.data_str("refreshToken").map(str::to_string);

    let claims = ctx.validator.validate(&access_token).map_err(|e| {
        warn!("Login answer carried an unverifiable token: {}", e);
        ActionOutcome::failure(LOGIN_FAILED)
    })?;

    let requested = form.redirect.trim();
    let location = if !requested.is_empty() && is_valid_redirect_for_role(requested, claims.role)
    {
        requested.to_string()
    } else {
        default_dashboard_route(claims.role).to_string()
    };

    Ok(ActionOutcome::Redirect(Redirect::with_session(
        location,
        SessionUpdate::Set(SessionTokens {
            access_token,
            refresh_token,
        }),
    )))
}

/// Drop the session and go back to the login page
pub async fn logout(ctx: &ActionContext) -> ActionOutcome {
    ctx.observe("logout", attempt_logout(ctx)).await
}

async fn attempt_logout(ctx: &ActionContext) -> Step<ActionOutcome> {
    ctx.client.revalidate_tag(USER_INFO_TAG).await;

    Ok(ActionOutcome::Redirect(Redirect::with_session(
        LOGIN_ROUTE,
        SessionUpdate::Clear,
    )))
}

pub async fn change_password(ctx: &ActionContext, form: ChangePasswordForm) -> ActionOutcome {
    ctx.observe("change_password", attempt_change_password(ctx, form))
        .await
}

async fn attempt_change_password(
    ctx: &ActionContext,
    form: ChangePasswordForm,
) -> Step<ActionOutcome> {
    let token = ctx.require_session()?;
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::POST, CHANGE_PASSWORD_PATH, Some(token), &payload)
            .await,
        CHANGE_PASSWORD_FAILED,
    )?;

    ctx.client.revalidate_tag(USER_INFO_TAG).await;
    Ok(ActionOutcome::success(envelope.message))
}

pub async fn forgot_password(ctx: &ActionContext, form: ForgotPasswordForm) -> ActionOutcome {
    ctx.observe("forgot_password", attempt_forgot_password(ctx, form))
        .await
}

async fn attempt_forgot_password(
    ctx: &ActionContext,
    form: ForgotPasswordForm,
) -> Step<ActionOutcome> {
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::POST, FORGOT_PASSWORD_PATH, None, &payload)
            .await,
        FORGOT_PASSWORD_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}

pub async fn reset_password(ctx: &ActionContext, form: ResetPasswordForm) -> ActionOutcome {
    ctx.observe("reset_password", attempt_reset_password(ctx, form))
        .await
}

async fn attempt_reset_password(
    ctx: &ActionContext,
    form: ResetPasswordForm,
) -> Step<ActionOutcome> {
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::POST, RESET_PASSWORD_PATH, None, &payload)
            .await,
        RESET_PASSWORD_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}
