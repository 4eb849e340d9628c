use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

/// Response body shape of every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Value> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ApiMeta>,
}

impl ApiEnvelope<Value> {
    /// Read a string field out of `data`
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.as_ref()?.get(key)?.as_str()
    }

    /// Re-decode `data` into a typed value.
    ///
    /// `Ok(None)` only when there is no `data` at all; a `data` of the wrong
    /// shape is an error.
    pub fn data_as<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<Option<T>> {
        self.data
            .as_ref()
            .filter(|value| !value.is_null())
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
    }
}
