use sea_orm::DbErr;

use super::{geocode::GeocodeError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (timeouts, server errors)
    Retry,
    /// Failed permanently (bad request, quota, missing data)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::GeocodeError(GeocodeError::Request(reqwest_error)) => {
                if reqwest_error.is_decode() {
                    // Places answered with something other than its JSON schema
                    ErrorRetryStrategy::Fail
                } else if let Some(status) = reqwest_error.status() {
                    match status {
                        // Places is temporarily unavailable, backoff and retry
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,
                        // Invalid request or key, won't resolve by retrying
                        _ => ErrorRetryStrategy::Fail,
                    }
                } else {
                    // Network error, timeout or connection issue
                    ErrorRetryStrategy::Retry
                }
            }

            // Google documents UNKNOWN_ERROR as a server-side error that may succeed on retry
            Self::GeocodeError(GeocodeError::Status { status, .. }) if status == "UNKNOWN_ERROR" => {
                ErrorRetryStrategy::Retry
            }

            // Quota exhaustion, denied key, invalid request
            Self::GeocodeError(GeocodeError::Status { .. }) => ErrorRetryStrategy::Fail,

            // Per-record outcomes, retrying gives the same answer
            Self::GeocodeError(GeocodeError::Miss { .. }) => ErrorRetryStrategy::Fail,
            Self::GeocodeError(GeocodeError::EmptyAddress) => ErrorRetryStrategy::Fail,

            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                _ => ErrorRetryStrategy::Fail,
            },

            Self::UpstreamError(_) => ErrorRetryStrategy::Fail,
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::RequestError(_) => ErrorRetryStrategy::Fail,
            Self::ReqwestError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
