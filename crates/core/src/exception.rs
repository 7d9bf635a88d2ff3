use serde::{Deserialize, Serialize};

/// A captured application failure: a human-readable message plus a backtrace.
///
/// This is a plain value object. The host application builds one at its
/// exception-handling boundary and hands it to a notifier; nothing here keeps
/// a reference to the original error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExceptionInfo {
    /// Human-readable failure message. An exception with no message is
    /// represented as the empty string, never as an absent field.
    pub message: String,

    /// Stack frames, outermost call last, as rendered strings. May be empty
    /// when the source error carries no backtrace.
    pub backtrace: Vec<String>,
}

impl ExceptionInfo {
    /// Create an exception with the given message and no backtrace.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            backtrace: Vec::new(),
        }
    }

    /// Attach a backtrace, replacing any existing frames.
    #[must_use]
    pub fn with_backtrace<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backtrace = frames.into_iter().map(Into::into).collect();
        self
    }

    /// Capture an exception from a standard error value.
    ///
    /// The message is the error's `Display` rendering; std errors carry no
    /// frame information, so the backtrace is empty.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_empty_backtrace() {
        let info = ExceptionInfo::new("boom");
        assert_eq!(info.message, "boom");
        assert!(info.backtrace.is_empty());
    }

    #[test]
    fn with_backtrace_replaces_frames() {
        let info = ExceptionInfo::new("boom")
            .with_backtrace(["app.rs:10", "main.rs:3"])
            .with_backtrace(["lib.rs:1"]);
        assert_eq!(info.backtrace, vec!["lib.rs:1"]);
    }

    #[test]
    fn from_error_uses_display() {
        let io_err = std::io::Error::other("disk on fire");
        let info = ExceptionInfo::from_error(&io_err);
        assert_eq!(info.message, "disk on fire");
        assert!(info.backtrace.is_empty());
    }

    #[test]
    fn default_message_is_empty_string() {
        let info = ExceptionInfo::default();
        assert_eq!(info.message, "");
    }
}
