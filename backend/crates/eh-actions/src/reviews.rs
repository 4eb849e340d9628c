use crate::{ActionContext, ActionOutcome, FormSchema, FormValidator, Step};

use eh_client::Method;
use eh_core::{FieldError, Role};

use serde::{Deserialize, Serialize};

const REVIEW_PATH: &str = "/review";
const REVIEW_FAILED: &str = "Failed to submit review";

const USERS: &[Role] = &[Role::User];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateReviewForm {
    pub event_id: String,
    pub rating: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    pub event_id: String,
    pub rating: i64,
    pub comment: String,
}

impl FormSchema for CreateReviewForm {
    type Payload = CreateReviewPayload;

    fn validate(&self) -> Result<CreateReviewPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("eventId", &self.event_id, "Event id");
        let rating = v.integer(
            "rating",
            &self.rating,
            1,
            Some(5),
            "Rating must be between 1 and 5",
        );
        v.min_len(
            "comment",
            &self.comment,
            5,
            "Comment must be at least 5 characters long",
        );

        let Some(rating) = rating else {
            return Err(v.into_errors());
        };
        v.finish(|| CreateReviewPayload {
            event_id: self.event_id.trim().to_string(),
            rating,
            comment: self.comment.trim().to_string(),
        })
    }
}

pub async fn create_review(ctx: &ActionContext, form: CreateReviewForm) -> ActionOutcome {
    ctx.observe("create_review", attempt_create_review(ctx, form))
        .await
}

async fn attempt_create_review(ctx: &ActionContext, form: CreateReviewForm) -> Step<ActionOutcome> {
    let token = ctx.require_role(USERS)?;
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::POST, REVIEW_PATH, Some(token), &payload)
            .await,
        REVIEW_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}
