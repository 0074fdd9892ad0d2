//! Failure taxonomy for client-side requests.
//!
//! Every failure terminates exactly one request lifecycle; nothing here is
//! fatal to the process, and the caller stays ready for the next
//! user-triggered attempt.

/// Errors produced by one request against the Carelink service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered outside the 2xx range, or with an unusable body.
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },
    /// The request never reached the server.
    #[error("no network connection")]
    NoNetwork,
    /// Configuration rejected at startup.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Anything else that went wrong while the request was in flight.
    #[error("{0}")]
    Unexpected(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Translate a failure into the string shown to the user.
    ///
    /// Server-provided messages pass through verbatim; transport and
    /// unexpected faults get a fixed wording so the user is never shown a
    /// raw error chain.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::NoNetwork => "No network connection".to_string(),
            ApiError::InvalidConfig(message) | ApiError::Unexpected(message) => {
                format!("An error occurred: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_passes_through_verbatim() {
        let error = ApiError::Status {
            code: 401,
            message: "Invalid credentials. Please try again.".to_string(),
        };
        assert_eq!(error.user_message(), "Invalid credentials. Please try again.");
    }

    #[test]
    fn no_network_has_fixed_wording() {
        assert_eq!(ApiError::NoNetwork.user_message(), "No network connection");
    }

    #[test]
    fn unexpected_faults_are_wrapped() {
        let error = ApiError::Unexpected("connection reset".to_string());
        assert_eq!(error.user_message(), "An error occurred: connection reset");
    }
}
