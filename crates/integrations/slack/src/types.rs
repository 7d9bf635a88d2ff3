use serde::{Deserialize, Serialize};

/// Request body for a Slack incoming webhook.
///
/// Field order is fixed by the struct definition, so identical inputs always
/// serialize to byte-identical JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackWebhookRequest {
    /// Channel to post to. Omitted when neither configuration nor the
    /// per-call context names one; the webhook's default channel then applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Username shown on the message.
    pub username: String,

    /// Icon emoji shown on the message.
    pub icon_emoji: String,

    /// Always a single attachment describing the exception.
    pub attachments: Vec<SlackAttachment>,
}

/// A Slack attachment object describing one exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackAttachment {
    /// Sidebar color; always `"danger"` for exception reports.
    pub color: String,

    /// The exception message. Empty messages stay the empty string.
    pub title: String,

    /// One-line `*METHOD* url` summary. Present only for request-bound
    /// failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Detail fields, rendered top-to-bottom in the order given here.
    pub fields: Vec<SlackField>,

    /// Attachment sub-keys Slack should render as markdown.
    pub mrkdwn_in: Vec<String>,
}

/// A titled field within an attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackField {
    /// Field heading.
    pub title: String,

    /// Field body.
    pub value: String,

    /// Whether Slack may render this field side-by-side with another.
    pub short: bool,
}

impl SlackField {
    /// A field rendered side-by-side with its neighbor.
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }

    /// A full-width field.
    pub fn long(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}
