//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Three recoverable classes reach the UI: transport failures (retry on user
//! action), expired sessions (re-authenticate), and plain non-success
//! statuses (surface inline). Validation errors never become an `ApiError`;
//! they are caught before a request is dispatched.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: no usable response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The session is missing or expired; the caller should re-authenticate.
    #[error("session expired")]
    Unauthorized,
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Status(status)
        }
    }

    /// Whether this failure should eject the user to the login screen.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
