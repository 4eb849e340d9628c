//! Joining and leaving events.
//!
//! Free events are joined directly. Paid events start a hosted checkout
//! instead and the join happens once the payment is verified.

use crate::{ActionContext, ActionOutcome, FormSchema, FormValidator, Step};

use eh_client::Method;
use eh_core::{FieldError, Role};

use log::warn;
use serde::{Deserialize, Serialize};

const JOIN_PATH: &str = "/participant/join";
const LEAVE_PATH: &str = "/participant/leave";
const PAYMENT_INIT_PATH: &str = "/payment/init";

const JOIN_FAILED: &str = "Failed to join event";
const LEAVE_FAILED: &str = "Failed to leave event";
const PAYMENT_INIT_FAILED: &str = "Failed to start payment";

const USERS: &[Role] = &[Role::User];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JoinEventForm {
    pub event_id: String,
    pub joining_fee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinEventPayload {
    pub event_id: String,
    #[serde(skip)]
    pub joining_fee: f64,
}

impl JoinEventPayload {
    pub fn is_paid(&self) -> bool {
        self.joining_fee > 0.0
    }
}

impl FormSchema for JoinEventForm {
    type Payload = JoinEventPayload;

    fn validate(&self) -> Result<JoinEventPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("eventId", &self.event_id, "Event id");
        let fee = v.number(
            "joiningFee",
            &self.joining_fee,
            0.0,
            "Joining fee must be a number of at least 0",
        );

        let Some(fee) = fee else {
            return Err(v.into_errors());
        };
        v.finish(|| JoinEventPayload {
            event_id: self.event_id.trim().to_string(),
            joining_fee: fee,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaveEventForm {
    pub event_id: String,
}

impl FormSchema for LeaveEventForm {
    type Payload = String;

    fn validate(&self) -> Result<String, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("eventId", &self.event_id, "Event id");
        v.finish(|| self.event_id.trim().to_string())
    }
}

/// Join a free event, or redirect to checkout for a paid one
pub async fn join_event(ctx: &ActionContext, form: JoinEventForm) -> ActionOutcome {
    ctx.observe("join_event", attempt_join_event(ctx, form))
        .await
}

async fn attempt_join_event(ctx: &ActionContext, form: JoinEventForm) -> Step<ActionOutcome> {
    let token = ctx.require_role(USERS)?;
    let payload = form.validated()?;

    if payload.is_paid() {
        let envelope = ctx.backend(
            ctx.client
                .send_json(Method::POST, PAYMENT_INIT_PATH, Some(token), &payload)
                .await,
            PAYMENT_INIT_FAILED,
        )?;

        return match envelope.data_str("paymentUrl") {
            Some(url) if !url.is_empty() => Ok(ActionOutcome::redirect(url)),
            _ => {
                warn!("Payment init answer carried no paymentUrl");
                Err(ActionOutcome::failure(PAYMENT_INIT_FAILED))
            }
        };
    }

    let path = format!("{}/{}", JOIN_PATH, payload.event_id);
    let envelope = ctx.backend(
        ctx.client
            .send_empty(Method::POST, &path, Some(token))
            .await,
        JOIN_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}

pub async fn leave_event(ctx: &ActionContext, form: LeaveEventForm) -> ActionOutcome {
    ctx.observe("leave_event", attempt_leave_event(ctx, form))
        .await
}

async fn attempt_leave_event(ctx: &ActionContext, form: LeaveEventForm) -> Step<ActionOutcome> {
    let token = ctx.require_role(USERS)?;
    let event_id = form.validated()?;
    let path = format!("{}/{}", LEAVE_PATH, event_id);
    let envelope = ctx.backend(
        ctx.client
            .send_empty(Method::DELETE, &path, Some(token))
            .await,
        LEAVE_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}
