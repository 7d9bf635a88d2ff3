use crate::exception::ExceptionInfo;

/// Produces the frames that notifiers render, from a captured exception.
///
/// Framework integrations implement this to strip frames that are noise in
/// their context (framework internals, middleware plumbing). Notifiers take a
/// cleaner at construction time; outside any particular framework the
/// [`IdentityCleaner`] is used.
pub trait BacktraceCleaner: Send + Sync {
    /// Return the frames to render for this exception, in original order.
    fn clean(&self, exception: &ExceptionInfo) -> Vec<String>;
}

/// The default cleaner: returns the exception's frames unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCleaner;

impl BacktraceCleaner for IdentityCleaner {
    fn clean(&self, exception: &ExceptionInfo) -> Vec<String> {
        exception.backtrace.clone()
    }
}

/// A cleaner that drops frames containing any of a set of substrings.
///
/// Mirrors the silencer half of a framework backtrace cleaner: frames that
/// match a silenced pattern are removed, everything else passes through in
/// order.
#[derive(Debug, Clone, Default)]
pub struct SilencerCleaner {
    patterns: Vec<String>,
}

impl SilencerCleaner {
    /// Create a cleaner with no silenced patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Silence frames containing the given substring.
    #[must_use]
    pub fn silence(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }
}

impl BacktraceCleaner for SilencerCleaner {
    fn clean(&self, exception: &ExceptionInfo) -> Vec<String> {
        exception
            .backtrace
            .iter()
            .filter(|frame| !self.patterns.iter().any(|p| frame.contains(p.as_str())))
            .cloned()
            .collect()
    }
}
