use crate::client::cache::DEFAULT_MAX_ENTRIES_PER_TAG;
use crate::{ClientError, ClientResult, FileUpload, RevalidationCache};

use eh_core::ApiEnvelope;

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;

/// HTTP client for the external REST backend.
///
/// Every endpoint answers with an [`ApiEnvelope`]; non-2xx answers become
/// [`ClientError::Api`] carrying the envelope's message.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: ReqwestClient,
    cache: RevalidationCache,
}

impl BackendClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend API root (e.g., "http://localhost:5000/api/v1")
    /// * `timeout` - Whole-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            cache: RevalidationCache::new(),
        })
    }

    /// Replace the cache with one whose entries stay fresh for `ttl`
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = RevalidationCache::with_limits(ttl, DEFAULT_MAX_ENTRIES_PER_TAG);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &RevalidationCache {
        &self.cache
    }

    /// Build a request, attaching the raw access token when present
    fn request(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let mut req = self.client.request(method, &url);

        if let Some(token) = access_token {
            req = req.header(AUTHORIZATION, token);
        }

        req
    }

    /// Execute request and decode the envelope
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<ApiEnvelope> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiEnvelope>(&body)
                .ok()
                .map(|envelope| envelope.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| {
                    format!(
                        "Request failed with status {}",
                        status.canonical_reason().unwrap_or(status.as_str())
                    )
                });
            warn!("Backend answered {}: {}", status.as_u16(), message);
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let envelope: ApiEnvelope = serde_json::from_slice(&body)?;
        if !envelope.success {
            return Err(ClientError::api_error(status.as_u16(), envelope.message));
        }

        Ok(envelope)
    }

    /// Send a JSON body
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
        body: &B,
    ) -> ClientResult<ApiEnvelope> {
        let req = self.request(method, path, access_token).json(body);
        self.execute(req).await
    }

    /// Send a multipart body: the payload as a JSON `data` part plus an
    /// optional `file` part
    pub async fn send_multipart<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
        data: &B,
        file: Option<FileUpload>,
    ) -> ClientResult<ApiEnvelope> {
        let mut form = Form::new().text("data", serde_json::to_string(data)?);

        if let Some(file) = file.filter(|f| !f.is_empty()) {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part("file", part);
        }

        let req = self.request(method, path, access_token).multipart(form);
        self.execute(req).await
    }

    /// Send a request without a body
    pub async fn send_empty(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
    ) -> ClientResult<ApiEnvelope> {
        let req = self.request(method, path, access_token);
        self.execute(req).await
    }

    pub async fn get(&self, path: &str, access_token: Option<&str>) -> ClientResult<ApiEnvelope> {
        self.send_empty(Method::GET, path, access_token).await
    }

    /// GET through the revalidation cache. Entries are keyed by path and
    /// token so two sessions never share a cached answer.
    pub async fn get_cached(
        &self,
        path: &str,
        access_token: Option<&str>,
        tag: &str,
    ) -> ClientResult<ApiEnvelope> {
        let key = format!("{}|{}", path, access_token.unwrap_or(""));

        if let Some(hit) = self.cache.get(tag, &key).await {
            debug!("Cache hit for {} under '{}'", path, tag);
            return Ok(hit);
        }

        let envelope = self.get(path, access_token).await?;
        self.cache.insert(tag, &key, envelope.clone()).await;
        Ok(envelope)
    }

    pub async fn revalidate_tag(&self, tag: &str) -> usize {
        self.cache.revalidate_tag(tag).await
    }
}
