use faultline_notifier::NotifierError;
use thiserror::Error;

/// Errors specific to the Slack notifier.
///
/// These are internal errors that get converted into [`NotifierError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum SlackError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook endpoint answered with a non-success response. Slack
    /// reports webhook errors as a plain-text body such as `invalid_payload`.
    #[error("Slack webhook error: {0}")]
    Api(String),

    /// The notifier is missing required configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<SlackError> for NotifierError {
    fn from(err: SlackError) -> Self {
        match err {
            SlackError::Http(e) => NotifierError::Connection(e.to_string()),
            SlackError::Api(msg) => NotifierError::Delivery(msg),
            SlackError::Config(msg) => NotifierError::Configuration(msg),
        }
    }
}
