//! Errors returned by admin client calls.

use thiserror::Error;

use crate::control::ControlId;

/// Failure of a remote admin call, or a refused click.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("HTTP error {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },
    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
    /// The control already has a call in flight.
    #[error("{0} is already pending")]
    ControlBusy(ControlId),
}
