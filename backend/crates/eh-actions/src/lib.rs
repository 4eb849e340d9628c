//! Validated form actions.
//!
//! Each action decodes a typed form, validates it, makes at most one backend
//! call and translates the answer into an [`ActionOutcome`].

pub mod admin;
pub mod auth;
pub mod context;
pub mod events;
pub mod host_applications;
pub mod metrics;
pub mod outcome;
pub mod participation;
pub mod payments;
pub mod profile;
pub mod redaction;
pub mod reviews;
pub mod validation;

pub use context::ActionContext;
pub use metrics::{ACTIONS_TOTAL, ActionMetrics};
pub use outcome::{ActionOutcome, Redirect, SessionUpdate, Step};
pub use profile::USER_INFO_TAG;
pub use validation::{FormSchema, FormValidator, VALIDATION_FAILED};
