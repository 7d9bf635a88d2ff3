//! Slack notifier for the Faultline exception notification toolkit.
//!
//! This crate implements the [`Notifier`](faultline_notifier::Notifier)
//! trait, delivering exception reports through
//! [Slack incoming webhooks](https://api.slack.com/messaging/webhooks) as a
//! single red attachment carrying the failure message, a quoted backtrace,
//! and — when the failure happened while serving a request — the request
//! line, parameters, and any extra exception data.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use faultline_slack::{SlackConfig, SlackNotifier};
//!
//! let config = SlackConfig::new("https://hooks.slack.com/services/T000/B000/XXXX")
//!     .with_channel("#incidents");
//! let notifier = SlackNotifier::new(config);
//! ```

pub mod config;
pub mod error;
pub mod notifier;
pub mod types;

pub use config::SlackConfig;
pub use error::SlackError;
pub use notifier::SlackNotifier;
pub use types::{SlackAttachment, SlackField, SlackWebhookRequest};
