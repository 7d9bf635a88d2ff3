use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::request::RequestInfo;

/// Per-call context accompanying one exception.
///
/// Everything here is optional and transient: the context exists only for the
/// duration of a single `notify` call. Delivery overrides
/// (`channel`/`username`/`icon_emoji`) take precedence over a notifier's
/// static configuration, which takes precedence over built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationContext {
    /// Name of the application reporting the failure. Shown as a "Project"
    /// field when present; the caller supplies it explicitly rather than the
    /// notifier probing its environment.
    pub project: Option<String>,

    /// Deployment environment name (e.g. `production`).
    pub environment: Option<String>,

    /// The request that was being served when the exception was raised, if
    /// any. Its presence enables the request-bound parts of the payload.
    pub request: Option<RequestInfo>,

    /// Additional exception-specific key/value pairs supplied by the host
    /// application.
    pub exception_data: BTreeMap<String, String>,

    /// Per-call channel override.
    pub channel: Option<String>,

    /// Per-call username override.
    pub username: Option<String>,

    /// Per-call icon emoji override.
    pub icon_emoji: Option<String>,
}

impl NotificationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reporting application's name.
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set the deployment environment name.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Attach the in-flight request summary.
    #[must_use]
    pub fn with_request(mut self, request: RequestInfo) -> Self {
        self.request = Some(request);
        self
    }

    /// Add one additional exception data entry.
    #[must_use]
    pub fn with_exception_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.exception_data.insert(key.into(), value.into());
        self
    }

    /// Override the delivery channel for this call.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Override the delivery username for this call.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Override the delivery icon emoji for this call.
    #[must_use]
    pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(icon_emoji.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context() {
        let ctx = NotificationContext::new();
        assert!(ctx.project.is_none());
        assert!(ctx.request.is_none());
        assert!(ctx.exception_data.is_empty());
        assert!(ctx.channel.is_none());
    }

    #[test]
    fn builder_sets_all_fields() {
        let ctx = NotificationContext::new()
            .with_project("storefront")
            .with_environment("production")
            .with_request(RequestInfo::new("GET", "http://x/y"))
            .with_exception_data("user_id", "42")
            .with_channel("#incidents")
            .with_username("pager")
            .with_icon_emoji(":rotating_light:");

        assert_eq!(ctx.project.as_deref(), Some("storefront"));
        assert_eq!(ctx.environment.as_deref(), Some("production"));
        assert_eq!(ctx.request.as_ref().map(|r| r.method.as_str()), Some("GET"));
        assert_eq!(ctx.exception_data.get("user_id").map(String::as_str), Some("42"));
        assert_eq!(ctx.channel.as_deref(), Some("#incidents"));
        assert_eq!(ctx.username.as_deref(), Some("pager"));
        assert_eq!(ctx.icon_emoji.as_deref(), Some(":rotating_light:"));
    }

    #[test]
    fn exception_data_entries_accumulate() {
        let ctx = NotificationContext::new()
            .with_exception_data("b", "2")
            .with_exception_data("a", "1");
        let keys: Vec<&str> = ctx.exception_data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
