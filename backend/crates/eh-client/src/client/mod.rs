pub(crate) mod cache;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod upload;

pub use cache::RevalidationCache;
pub use client::BackendClient;
pub use error::{ClientError, Result as ClientResult};
pub use upload::FileUpload;
