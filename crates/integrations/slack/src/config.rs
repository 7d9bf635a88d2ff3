/// Configuration for the Slack notifier.
///
/// Immutable once constructed; a failed delivery never mutates it.
#[derive(Clone)]
pub struct SlackConfig {
    /// Slack incoming webhook URL.
    pub webhook_url: String,

    /// Channel to post to. When unset here and in the per-call context, the
    /// webhook's own default channel applies.
    pub channel: Option<String>,

    /// Username shown on messages. Falls back to `"Exception Notifier"`.
    pub username: Option<String>,

    /// Icon emoji shown on messages. Falls back to `":fire:"`.
    pub icon_emoji: Option<String>,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("webhook_url", &"[REDACTED]")
            .field("channel", &self.channel)
            .field("username", &self.username)
            .field("icon_emoji", &self.icon_emoji)
            .finish()
    }
}

impl SlackConfig {
    /// Create a new configuration with the given webhook URL.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            channel: None,
            username: None,
            icon_emoji: None,
        }
    }

    /// Set the channel to post to.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set the username shown on messages.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the icon emoji shown on messages.
    #[must_use]
    pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(icon_emoji.into());
        self
    }
}
