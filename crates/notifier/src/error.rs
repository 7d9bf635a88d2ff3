use thiserror::Error;

/// Errors surfaced by a notifier's `notify` call.
///
/// Nothing in this workspace retries a failed delivery; `is_retryable` only
/// classifies the failure for the caller, who sits on an error-reporting path
/// and typically logs and moves on.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The notifier is missing required configuration (e.g. no webhook URL).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The destination answered, but with a non-success response.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// A network or transport-level error occurred before a response was
    /// received.
    #[error("connection error: {0}")]
    Connection(String),
}

impl NotifierError {
    /// Returns `true` if the failure is transient and a later delivery may
    /// succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_is_retryable() {
        assert!(NotifierError::Connection("reset by peer".into()).is_retryable());
    }

    #[test]
    fn configuration_and_delivery_are_not() {
        assert!(!NotifierError::Configuration("no webhook_url".into()).is_retryable());
        assert!(!NotifierError::Delivery("HTTP 400".into()).is_retryable());
    }

    #[test]
    fn error_display() {
        let err = NotifierError::Configuration("no webhook_url".into());
        assert_eq!(err.to_string(), "invalid configuration: no webhook_url");

        let err = NotifierError::Delivery("HTTP 500: server_error".into());
        assert_eq!(err.to_string(), "delivery failed: HTTP 500: server_error");
    }
}
