use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from calls to the random-profile service
#[derive(Error, Debug)]
pub enum RandomUserError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Random user service returned status {status} {location}")]
    Status {
        status: u16,
        location: ErrorLocation,
    },

    #[error("Invalid random user response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl RandomUserError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_decode() {
            RandomUserError::Decode {
                message: err.to_string(),
                location,
                source: err,
            }
        } else {
            RandomUserError::Http {
                message: err.to_string(),
                location,
                source: err,
            }
        }
    }

    #[track_caller]
    pub fn status(status: u16) -> Self {
        RandomUserError::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RandomUserError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RandomUserError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, RandomUserError>;
