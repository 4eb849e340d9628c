//! eh-client library
//!
//! HTTP client for the external REST backend, plus the tagged revalidation
//! cache used for person info.

pub(crate) mod client;


pub use client::{BackendClient, ClientError, ClientResult, FileUpload, RevalidationCache};
pub use reqwest::Method;
