mod action_result;
mod api_envelope;
mod host_application_status;
mod person;
mod role;
