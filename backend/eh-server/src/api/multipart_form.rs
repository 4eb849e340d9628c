//! Decoding `multipart/form-data` submissions into typed forms

use crate::{ApiError, ApiResult};

use eh_client::FileUpload;

use axum::extract::Multipart;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Name of the part carrying an uploaded image
pub const FILE_FIELD: &str = "file";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Read every text part into `T` and keep the `file` part aside.
///
/// Text parts are gathered by name; an empty file input (no bytes) is
/// treated as no upload.
pub async fn read_multipart<T>(mut multipart: Multipart) -> ApiResult<(T, Option<FileUpload>)>
where
    T: DeserializeOwned,
{
    let mut fields = Map::new();
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == FILE_FIELD {
            let file_name = field.file_name().unwrap_or(FILE_FIELD).to_string();
            let content_type = field
                .content_type()
                .unwrap_or(DEFAULT_CONTENT_TYPE)
                .to_string();
            let bytes = field.bytes().await?;
            let upload = FileUpload::new(file_name, content_type, bytes.to_vec());
            file = (!upload.is_empty()).then_some(upload);
        } else {
            let text = field.text().await?;
            fields.insert(name, Value::String(text));
        }
    }

    let form = serde_json::from_value(Value::Object(fields)).map_err(|e| {
        ApiError::bad_request(format!("Invalid form fields: {e}"), None)
    })?;

    Ok((form, file))
}
