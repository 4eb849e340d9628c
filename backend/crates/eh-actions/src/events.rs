//! Host event management and admin event moderation.

use crate::{
    ActionContext, ActionOutcome, FormSchema, FormValidator, Step, validation::non_empty,
};

use eh_client::{FileUpload, Method};
use eh_core::{EventStatus, FieldError, Role};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const PARTICIPANT_RANGE: &str = "Maximum participants must be greater than or equal to minimum";

const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters long";
const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 10 characters long";
const MIN_PARTICIPANTS_INVALID: &str = "Minimum participants must be a whole number of at least 1";
const MAX_PARTICIPANTS_INVALID: &str = "Maximum participants must be a whole number of at least 1";
const JOINING_FEE_INVALID: &str = "Joining fee must be a number of at least 0";
const STATUS_INVALID: &str = "Status must be one of OPEN, FULL, CANCELLED, COMPLETED";

const CREATE_EVENT_FAILED: &str = "Failed to create event";
const UPDATE_EVENT_FAILED: &str = "Failed to update event";
const DELETE_EVENT_FAILED: &str = "Failed to delete event";
const UPDATE_STATUS_FAILED: &str = "Failed to update event status";

const EVENT_PATH: &str = "/event";

const HOSTS: &[Role] = &[Role::Host];
const HOSTS_AND_ADMINS: &[Role] = &[Role::Host, Role::Admin];
const ADMINS: &[Role] = &[Role::Admin];

/// `YYYY-MM-DDTHH:MM:00`, the backend's event timestamp format
fn merge_date_time(date: NaiveDate, time: NaiveTime) -> String {
    format!("{}T{}:00", date.format("%Y-%m-%d"), time.format("%H:%M"))
}

// =========================================================================
// Forms
// =========================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEventForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub min_participants: String,
    pub max_participants: String,
    pub joining_fee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date_time: String,
    pub min_participants: i64,
    pub max_participants: i64,
    pub joining_fee: f64,
}

impl FormSchema for CreateEventForm {
    type Payload = CreateEventPayload;

    fn validate(&self) -> Result<CreateEventPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.min_len("title", &self.title, 3, TITLE_TOO_SHORT);
        v.min_len("description", &self.description, 10, DESCRIPTION_TOO_SHORT);
        v.required("category", &self.category, "Category is required");
        v.required("location", &self.location, "Location is required");
        let date = v.date("date", &self.date);
        let time = v.time("time", &self.time);
        let min = v.integer(
            "minParticipants",
            &self.min_participants,
            1,
            None,
            MIN_PARTICIPANTS_INVALID,
        );
        let max = v.integer(
            "maxParticipants",
            &self.max_participants,
            1,
            None,
            MAX_PARTICIPANTS_INVALID,
        );
        if let (Some(min), Some(max)) = (min, max) {
            v.check("maxParticipants", max >= min, PARTICIPANT_RANGE);
        }
        let fee = v.number("joiningFee", &self.joining_fee, 0.0, JOINING_FEE_INVALID);

        let (Some(date), Some(time), Some(min), Some(max), Some(fee)) = (date, time, min, max, fee)
        else {
            return Err(v.into_errors());
        };

        v.finish(|| CreateEventPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            location: self.location.trim().to_string(),
            date_time: merge_date_time(date, time),
            min_participants: min,
            max_participants: max,
            joining_fee: fee,
        })
    }
}

/// Edit form: every field but the id may be left blank to keep its value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateEventForm {
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub min_participants: String,
    pub max_participants: String,
    pub joining_fee: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventPayload {
    #[serde(skip)]
    pub event_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_participants: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_fee: Option<f64>,
}

impl FormSchema for UpdateEventForm {
    type Payload = UpdateEventPayload;

    fn validate(&self) -> Result<UpdateEventPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("eventId", &self.event_id, "Event id");

        let title = non_empty(&self.title);
        if let Some(title) = &title {
            v.min_len("title", title, 3, TITLE_TOO_SHORT);
        }
        let description = non_empty(&self.description);
        if let Some(description) = &description {
            v.min_len("description", description, 10, DESCRIPTION_TOO_SHORT);
        }

        let date = non_empty(&self.date).and_then(|d| v.date("date", &d));
        let time = non_empty(&self.time).and_then(|t| v.time("time", &t));
        match (non_empty(&self.date).is_some(), non_empty(&self.time).is_some()) {
            (true, false) => {
                v.check("time", false, "Time is required when changing the date");
            }
            (false, true) => {
                v.check("date", false, "Date is required when changing the time");
            }
            _ => {}
        }

        let min = non_empty(&self.min_participants).and_then(|m| {
            v.integer("minParticipants", &m, 1, None, MIN_PARTICIPANTS_INVALID)
        });
        let max = non_empty(&self.max_participants).and_then(|m| {
            v.integer("maxParticipants", &m, 1, None, MAX_PARTICIPANTS_INVALID)
        });
        if let (Some(min), Some(max)) = (min, max) {
            v.check("maxParticipants", max >= min, PARTICIPANT_RANGE);
        }
        let fee = non_empty(&self.joining_fee)
            .and_then(|f| v.number("joiningFee", &f, 0.0, JOINING_FEE_INVALID));

        v.finish(|| UpdateEventPayload {
            event_id: self.event_id.trim().to_string(),
            title,
            description,
            category: non_empty(&self.category),
            location: non_empty(&self.location),
            date_time: date.zip(time).map(|(d, t)| merge_date_time(d, t)),
            min_participants: min,
            max_participants: max,
            joining_fee: fee,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteEventForm {
    pub event_id: String,
}

impl FormSchema for DeleteEventForm {
    type Payload = String;

    fn validate(&self) -> Result<String, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("eventId", &self.event_id, "Event id");
        v.finish(|| self.event_id.trim().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventStatusForm {
    pub event_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventStatusPayload {
    #[serde(skip)]
    pub event_id: String,
    pub status: EventStatus,
}

impl FormSchema for EventStatusForm {
    type Payload = EventStatusPayload;

    fn validate(&self) -> Result<EventStatusPayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        v.identifier("eventId", &self.event_id, "Event id");
        let status = self.status.trim().parse::<EventStatus>().ok();
        v.check("status", status.is_some(), STATUS_INVALID);

        let Some(status) = status else {
            return Err(v.into_errors());
        };
        v.finish(|| EventStatusPayload {
            event_id: self.event_id.trim().to_string(),
            status,
        })
    }
}

// =========================================================================
// Actions
// =========================================================================

pub async fn create_event(
    ctx: &ActionContext,
    form: CreateEventForm,
    file: Option<FileUpload>,
) -> ActionOutcome {
    ctx.observe("create_event", attempt_create_event(ctx, form, file))
        .await
}

async fn attempt_create_event(
    ctx: &ActionContext,
    form: CreateEventForm,
    file: Option<FileUpload>,
) -> Step<ActionOutcome> {
    let token = ctx.require_role(HOSTS)?;
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_multipart(Method::POST, EVENT_PATH, Some(token), &payload, file)
            .await,
        CREATE_EVENT_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}

pub async fn update_event(
    ctx: &ActionContext,
    form: UpdateEventForm,
    file: Option<FileUpload>,
) -> ActionOutcome {
    ctx.observe("update_event", attempt_update_event(ctx, form, file))
        .await
}

async fn attempt_update_event(
    ctx: &ActionContext,
    form: UpdateEventForm,
    file: Option<FileUpload>,
) -> Step<ActionOutcome> {
    let token = ctx.require_role(HOSTS)?;
    let payload = form.validated()?;
    let path = format!("{}/{}", EVENT_PATH, payload.event_id);
    let envelope = ctx.backend(
        ctx.client
            .send_multipart(Method::PATCH, &path, Some(token), &payload, file)
            .await,
        UPDATE_EVENT_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}

pub async fn delete_event(ctx: &ActionContext, form: DeleteEventForm) -> ActionOutcome {
    ctx.observe("delete_event", attempt_delete_event(ctx, form))
        .await
}

async fn attempt_delete_event(ctx: &ActionContext, form: DeleteEventForm) -> Step<ActionOutcome> {
    let token = ctx.require_role(HOSTS_AND_ADMINS)?;
    let event_id = form.validated()?;
    let path = format!("{}/{}", EVENT_PATH, event_id);
    let envelope = ctx.backend(
        ctx.client
            .send_empty(Method::DELETE, &path, Some(token))
            .await,
        DELETE_EVENT_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}

pub async fn update_event_status(ctx: &ActionContext, form: EventStatusForm) -> ActionOutcome {
    ctx.observe("update_event_status", attempt_update_event_status(ctx, form))
        .await
}

async fn attempt_update_event_status(
    ctx: &ActionContext,
    form: EventStatusForm,
) -> Step<ActionOutcome> {
    let token = ctx.require_role(ADMINS)?;
    let payload = form.validated()?;
    let path = format!("{}/{}/status", EVENT_PATH, payload.event_id);
    let envelope = ctx.backend(
        ctx.client
            .send_json(Method::PATCH, &path, Some(token), &payload)
            .await,
        UPDATE_STATUS_FAILED,
    )?;

    Ok(ActionOutcome::success(envelope.message))
}
