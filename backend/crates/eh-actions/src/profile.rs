//! The signed-in person's own profile.

use crate::auth::{MIN_NAME_LENGTH, NAME_TOO_SHORT};
use crate::{ActionContext, ActionOutcome, FormSchema, FormValidator, Step, validation::non_empty};

use eh_client::{BackendClient, ClientResult, FileUpload, Method};
use eh_core::{FieldError, Person};

use serde::{Deserialize, Serialize};

/// Revalidation tag of cached person info
pub const USER_INFO_TAG: &str = "user-info";

const ME_PATH: &str = "/user/me";
const UPDATE_PROFILE_PATH: &str = "/user/update-my-profile";
const UPDATE_PROFILE_FAILED: &str = "Failed to update profile";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProfileForm {
    pub name: String,
    pub contact_number: String,
    pub address: String,
    pub bio: String,
}

/// Only the fields the person filled in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl FormSchema for UpdateProfileForm {
    type Payload = UpdateProfilePayload;

    fn validate(&self) -> Result<UpdateProfilePayload, Vec<FieldError>> {
        let mut v = FormValidator::new();
        let name = non_empty(&self.name);
        if let Some(name) = &name {
            v.min_len("name", name, MIN_NAME_LENGTH, NAME_TOO_SHORT);
        }

        v.finish(|| UpdateProfilePayload {
            name,
            contact_number: non_empty(&self.contact_number),
            address: non_empty(&self.address),
            bio: non_empty(&self.bio),
        })
    }
}

/// Current person, cached per access token under [`USER_INFO_TAG`]
pub async fn my_info(client: &BackendClient, access_token: &str) -> ClientResult<Option<Person>> {
    let envelope = client
        .get_cached(ME_PATH, Some(access_token), USER_INFO_TAG)
        .await?;
    Ok(envelope.data_as::<Person>()?)
}

pub async fn update_profile(
    ctx: &ActionContext,
    form: UpdateProfileForm,
    file: Option<FileUpload>,
) -> ActionOutcome {
    ctx.observe("update_profile", attempt_update_profile(ctx, form, file))
        .await
}

async fn attempt_update_profile(
    ctx: &ActionContext,
    form: UpdateProfileForm,
    file: Option<FileUpload>,
) -> Step<ActionOutcome> {
    let token = ctx.require_session()?;
    let payload = form.validated()?;
    let envelope = ctx.backend(
        ctx.client
            .send_multipart(Method::PATCH, UPDATE_PROFILE_PATH, Some(token), &payload, file)
            .await,
        UPDATE_PROFILE_FAILED,
    )?;

    ctx.client.revalidate_tag(USER_INFO_TAG).await;
    Ok(ActionOutcome::success(envelope.message))
}
