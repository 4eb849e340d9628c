pub mod action_result;
pub mod api_envelope;
pub mod event_status;
pub mod host_application_status;
pub mod person;
pub mod person_status;
pub mod profile;
pub mod role;
