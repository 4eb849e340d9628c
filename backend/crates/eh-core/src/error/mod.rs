use error_location::ErrorLocation;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid person status: {value} {location}")]
    InvalidPersonStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid event status: {value} {location}")]
    InvalidEventStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid host application status: {value} {location}")]
    InvalidHostApplicationStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
