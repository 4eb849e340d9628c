//! Confirmation of a hosted checkout.

use crate::{ActionContext, ActionOutcome, FormSchema, FormValidator, Step};

use eh_client::Method;
use eh_core::FieldError;

use serde::{Deserialize, Serialize};

const VERIFY_PATH: &str = "/payment/verify";
const VERIFY_FAILED: &str = "Payment verification failed";

/// Query string the checkout page returns to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyPaymentForm {
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentPayload {
    pub session_id: String,
}

impl FormSchema for VerifyPaymentForm {
    type Payload = VerifyPaymentPayload;

    fn validate(&self) -> Result<VerifyPaymentPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("session_id", &self.session_id, "Payment session id");
        v.finish(|| VerifyPaymentPayload {
            session_id: self.session_id.trim().to_string(),
        })
    }
}

pub async fn verify_payment(ctx: &ActionContext, form: VerifyPaymentForm) -> ActionOutcome {
    ctx.observe("verify_payment", attempt_verify_payment(ctx, form))
        .await
}

async fn attempt_verify_payment(
    ctx: &ActionContext,
    form: VerifyPaymentForm,
) -> Step<ActionOutcome> {
    let token = ctx.require_session()?;
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::POST, VERIFY_PATH, Some(token), &payload)
            .await,
        VERIFY_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}
