//! Requests to become a host and their review.

use crate::{
    ActionContext, ActionOutcome, FormSchema, FormValidator, Step, validation::non_empty,
};

use eh_client::Method;
use eh_core::{FieldError, HostApplicationStatus, Role};

use serde::{Deserialize, Serialize};

const HOST_APPLICATION_PATH: &str = "/host-application";

const APPLY_FAILED: &str = "Failed to submit host application";
const CANCEL_FAILED: &str = "Failed to cancel host application";
const REVIEW_FAILED: &str = "Failed to review host application";

const USERS: &[Role] = &[Role::User];
const ADMINS: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplyForHostForm {
    pub reason: String,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyForHostPayload {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl FormSchema for ApplyForHostForm {
    type Payload = ApplyForHostPayload;

    fn validate(&self) -> Result<ApplyForHostPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.min_len(
            "reason",
            &self.reason,
            20,
            "Reason must be at least 20 characters long",
        );

        v.finish(|| ApplyForHostPayload {
            reason: self.reason.trim().to_string(),
            experience: non_empty(&self.experience),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CancelHostApplicationForm {
    pub application_id: String,
}

impl FormSchema for CancelHostApplicationForm {
    type Payload = String;

    fn validate(&self) -> Result<String, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("applicationId", &self.application_id, "Application id");
        v.finish(|| self.application_id.trim().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewHostApplicationForm {
    pub application_id: String,
    pub status: String,
    pub admin_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewHostApplicationPayload {
    #[serde(skip)]
    pub application_id: String,
    pub status: HostApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
}

impl FormSchema for ReviewHostApplicationForm {
    type Payload = ReviewHostApplicationPayload;

    fn validate(&self) -> Result<ReviewHostApplicationPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("applicationId", &self.application_id, "Application id");
        let status = self
            .status
            .trim()
            .parse::<HostApplicationStatus>()
            .ok()
            .filter(HostApplicationStatus::is_admin_decision);
        v.check(
            "status",
            status.is_some(),
            "Status must be APPROVED or REJECTED",
        );

        let Some(status) = status else {
            return Err(v.into_errors());
        };
        v.finish(|| ReviewHostApplicationPayload {
            application_id: self.application_id.trim().to_string(),
            status,
            admin_note: non_empty(&self.admin_note),
        })
    }
}

pub async fn apply_for_host(ctx: &ActionContext, form: ApplyForHostForm) -> ActionOutcome {
    ctx.observe("apply_for_host", attempt_apply_for_host(ctx, form))
        .await
}

async fn attempt_apply_for_host(
    ctx: &ActionContext,
    form: ApplyForHostForm,
) -> Step<ActionOutcome> {
    let token = ctx.require_role(USERS)?;
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::POST, HOST_APPLICATION_PATH, Some(token), &payload)
            .await,
        APPLY_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}

pub async fn cancel_host_application(
    ctx: &ActionContext,
    form: CancelHostApplicationForm,
) -> ActionOutcome {
    ctx.observe(
        "cancel_host_application",
        attempt_cancel_host_application(ctx, form),
    )
    .await
}

async fn attempt_cancel_host_application(
    ctx: &ActionContext,
    form: CancelHostApplicationForm,
) -> Step<ActionOutcome> {
    let token = ctx.require_role(USERS)?;
    let application_id = form.validated()?;
    let path = format!("{}/{}/cancel", HOST_APPLICATION_PATH, application_id);
    let envelope = ctx.backend(
        ctx.client
            .send_empty(Method::PATCH, &path, Some(token))
            .await,
        CANCEL_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}

pub async fn review_host_application(
    ctx: &ActionContext,
    form: ReviewHostApplicationForm,
) -> ActionOutcome {
    ctx.observe(
        "review_host_application",
        attempt_review_host_application(ctx, form),
    )
    .await
}

async fn attempt_review_host_application(
    ctx: &ActionContext,
    form: ReviewHostApplicationForm,
) -> Step<ActionOutcome> {
    let token = ctx.require_role(ADMINS)?;
    let payload = form.validated()?;
    let path = format!("{}/{}/status", HOST_APPLICATION_PATH, payload.application_id);
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::PATCH, &path, Some(token), &payload)
            .await,
        REVIEW_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}
