pub mod actions;
pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod form_response;
pub mod guard;
pub mod multipart_form;
