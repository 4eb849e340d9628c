//! Person moderation.

use crate::{ActionContext, ActionOutcome, FormSchema, FormValidator, Step};

use eh_client::Method;
use eh_core::{ActionResult, FieldError, PersonStatus, Role};

use serde::{Deserialize, Serialize};

const PERSONS_PATH: &str = "/admin/persons";

const UPDATE_STATUS_FAILED: &str = "Failed to update user status";
const DELETE_FAILED: &str = "Failed to delete user";
const SELF_MODERATION: &str = "You cannot moderate your own account";

const ADMINS: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonStatusForm {
    pub person_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonStatusPayload {
    #[serde(skip)]
    pub person_id: String,
    pub status: PersonStatus,
}

impl FormSchema for PersonStatusForm {
    type Payload = PersonStatusPayload;

    fn validate(&self) -> Result<PersonStatusPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("personId", &self.person_id, "Person id");
        let status = self
            .status
            .trim()
            .parse::<PersonStatus>()
            .ok()
            .filter(PersonStatus::is_moderation_target);
        v.check("status", status.is_some(), "Status must be ACTIVE or BLOCKED");

        let Some(status) = status else {
            return Err(v.into_errors());
        };
        v.finish(|| PersonStatusPayload {
            person_id: self.person_id.trim().to_string(),
            status,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SoftDeletePersonForm {
    pub person_id: String,
}

impl FormSchema for SoftDeletePersonForm {
    type Payload = String;

    fn validate(&self) -> Result<String, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("personId", &self.person_id, "Person id");
        v.finish(|| self.person_id.trim().to_string())
    }
}

/// Admins act on other accounts only
fn refuse_self(ctx: &ActionContext, person_id: &str, form: &impl FormSchema) -> Step<()> {
    let is_self = ctx
        .session
        .claims()
        .is_some_and(|claims| !claims.id.is_empty() && claims.id == person_id);
    if is_self {
        return Err(ActionOutcome::Error(ActionResult::rejected(
            SELF_MODERATION,
            vec![FieldError::new("personId", SELF_MODERATION)],
            form.form_data(),
        )));
    }
    Ok(())
}

pub async fn update_person_status(ctx: &ActionContext, form: PersonStatusForm) -> ActionOutcome {
    ctx.observe("update_person_status", attempt_update_person_status(ctx, form))
        .await
}

async fn attempt_update_person_status(
    ctx: &ActionContext,
    form: PersonStatusForm,
) -> Step<ActionOutcome> {
    let token = ctx.require_role(ADMINS)?;
    let payload = form.validated()?;
    refuse_self(ctx, &payload.person_id, &form)?;
    let path = format!("{}/{}/status", PERSONS_PATH, payload.person_id);
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::PATCH, &path, Some(token), &payload)
            .await,
        UPDATE_STATUS_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}

pub async fn soft_delete_person(ctx: &ActionContext, form: SoftDeletePersonForm) -> ActionOutcome {
    ctx.observe("soft_delete_person", attempt_soft_delete_person(ctx, form))
        .await
}

async fn attempt_soft_delete_person(
    ctx: &ActionContext,
    form: SoftDeletePersonForm,
) -> Step<ActionOutcome> {
    let token = ctx.require_role(ADMINS)?;
    let person_id = form.validated()?;
    refuse_self(ctx, &person_id, &form)?;
    let path = format!("{}/{}", PERSONS_PATH, person_id);
    let envelope = ctx.backend(
        ctx.client
            .send_empty(Method::DELETE, &path, Some(token))
            .await,
        DELETE_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}
