use std::collections::BTreeMap;

use faultline_core::{
    BacktraceCleaner, ExceptionInfo, IdentityCleaner, NotificationContext, RequestInfo,
};
use faultline_notifier::{Notifier, NotifierError};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::SlackConfig;
use crate::error::SlackError;
use crate::types::{SlackAttachment, SlackField, SlackWebhookRequest};

/// Username used when neither configuration nor the per-call context sets one.
const DEFAULT_USERNAME: &str = "Exception Notifier";

/// Icon emoji used when neither configuration nor the per-call context sets one.
const DEFAULT_ICON_EMOJI: &str = ":fire:";

/// At most this many backtrace frames are included in the report.
const BACKTRACE_LIMIT: usize = 10;

/// Attachment sub-keys Slack renders as markdown.
const MRKDWN_IN: [&str; 4] = ["text", "title", "fallback", "fields"];

/// Slack notifier that reports exceptions via an incoming webhook.
///
/// Implements the [`Notifier`] trait so it can be registered in the notifier
/// registry alongside other destinations. Each `notify` call performs exactly
/// one outbound POST; failures are surfaced to the caller and never retried.
pub struct SlackNotifier {
    config: SlackConfig,
    cleaner: Box<dyn BacktraceCleaner>,
    client: Client,
}

impl SlackNotifier {
    /// Create a new Slack notifier with the given configuration.
    ///
    /// Uses a default `reqwest::Client` with a bounded timeout (a slow
    /// webhook endpoint must not hang the host application's failure path)
    /// and the identity backtrace cleaner.
    pub fn new(config: SlackConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self {
            config,
            cleaner: Box::new(IdentityCleaner),
            client,
        }
    }

    /// Create a new Slack notifier with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool across notifiers.
    pub fn with_client(config: SlackConfig, client: Client) -> Self {
        Self {
            config,
            cleaner: Box::new(IdentityCleaner),
            client,
        }
    }

    /// Replace the backtrace cleaner.
    ///
    /// Framework integrations supply a cleaner that strips frames that are
    /// noise in their context.
    #[must_use]
    pub fn with_cleaner(mut self, cleaner: Box<dyn BacktraceCleaner>) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Build the webhook request for one exception.
    ///
    /// Pure with respect to the notifier's state: identical inputs always
    /// yield an identical request.
    fn build_request(
        &self,
        exception: &ExceptionInfo,
        context: &NotificationContext,
    ) -> SlackWebhookRequest {
        // Delivery options layer as defaults -> static config -> per-call
        // context, later layers winning. `channel` has no built-in default.
        let channel = context
            .channel
            .clone()
            .or_else(|| self.config.channel.clone());
        let username = context
            .username
            .as_deref()
            .or(self.config.username.as_deref())
            .unwrap_or(DEFAULT_USERNAME)
            .to_owned();
        let icon_emoji = context
            .icon_emoji
            .as_deref()
            .or(self.config.icon_emoji.as_deref())
            .unwrap_or(DEFAULT_ICON_EMOJI)
            .to_owned();

        let attachment = SlackAttachment {
            color: "danger".to_owned(),
            title: exception.message.clone(),
            text: context.request.as_ref().map(request_line),
            fields: self.attachment_fields(exception, context),
            mrkdwn_in: MRKDWN_IN.iter().map(|s| (*s).to_owned()).collect(),
        };

        SlackWebhookRequest {
            channel,
            username,
            icon_emoji,
            attachments: vec![attachment],
        }
    }

    /// Build the attachment field list, in fixed order: Project, Environment,
    /// Backtrace, Data, Parameters. Optional fields are included only when
    /// their source data is present; Backtrace is always included.
    fn attachment_fields(
        &self,
        exception: &ExceptionInfo,
        context: &NotificationContext,
    ) -> Vec<SlackField> {
        let mut fields = Vec::new();

        if let Some(project) = &context.project {
            fields.push(SlackField::short("Project", project));
        }
        if let Some(environment) = &context.environment {
            fields.push(SlackField::short("Environment", environment));
        }

        fields.push(SlackField::long(
            "Backtrace",
            backtrace_block(&self.cleaner.clean(exception)),
        ));

        if let Some(request) = &context.request {
            fields.push(SlackField::long("Data", kv_block(&context.exception_data)));
            fields.push(SlackField::long("Parameters", kv_block(&request.parameters)));
        }

        fields
    }
}

/// One-line `*METHOD* url` summary of the in-flight request.
fn request_line(request: &RequestInfo) -> String {
    format!("*{}* {}", request.method, request.url)
}

/// The first [`BACKTRACE_LIMIT`] frames, each as a quoted line. An empty
/// backtrace yields an empty string; the field itself is still emitted.
fn backtrace_block(frames: &[String]) -> String {
    frames
        .iter()
        .take(BACKTRACE_LIMIT)
        .map(|frame| format!("> {frame}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Key/value entries rendered one quoted `*key*: value` line per entry.
fn kv_block(entries: &BTreeMap<String, String>) -> String {
    entries
        .iter()
        .map(|(key, value)| format!(">  *{key}*: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Notifier for SlackNotifier {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "slack"
    }

    #[instrument(skip(self, exception, context), fields(notifier = "slack"))]
    async fn notify(
        &self,
        exception: &ExceptionInfo,
        context: &NotificationContext,
    ) -> Result<(), NotifierError> {
        if self.config.webhook_url.is_empty() {
            return Err(SlackError::Config("webhook_url is not configured".into()).into());
        }

        let request = self.build_request(exception, context);

        debug!("posting exception report to Slack webhook");

        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(&request)
            .send()
            .await
            .map_err(SlackError::Http)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Slack webhook rejected exception report");
            return Err(SlackError::Api(format!("HTTP {status}: {body}")).into());
        }

        Ok(())
    }

    #[instrument(skip(self), fields(notifier = "slack"))]
    async fn health_check(&self) -> Result<(), NotifierError> {
        // Incoming webhooks have no side-effect-free endpoint; posting a
        // probe would write a message to the channel. Validate the
        // configuration only.
        if self.config.webhook_url.is_empty() {
            return Err(NotifierError::Configuration(
                "webhook_url is not configured".into(),
            ));
        }
        if !self.config.webhook_url.starts_with("http://")
            && !self.config.webhook_url.starts_with("https://")
        {
            return Err(NotifierError::Configuration(
                "webhook_url is not an http(s) URL".into(),
            ));
        }
        Ok(())
    }
}
