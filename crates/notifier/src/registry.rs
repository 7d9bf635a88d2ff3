use std::collections::HashMap;
use std::sync::Arc;

use faultline_core::{ExceptionInfo, NotificationContext};
use tracing::error;

use crate::error::NotifierError;
use crate::notifier::DynNotifier;

/// A registry that maps notifier names to their implementations.
///
/// Notifiers are stored behind `Arc<dyn DynNotifier>` so they can be shared
/// across tasks safely. The registry itself is not thread-safe for mutation;
/// it is intended to be built once at startup and then shared as an immutable
/// reference or wrapped in an `Arc`.
pub struct NotifierRegistry {
    notifiers: HashMap<String, Arc<dyn DynNotifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            notifiers: HashMap::new(),
        }
    }

    /// Register a notifier. The notifier's name (from [`DynNotifier::name`])
    /// is used as the lookup key.
    ///
    /// If a notifier with the same name already exists, it is replaced.
    pub fn register(&mut self, notifier: Arc<dyn DynNotifier>) {
        let name = notifier.name().to_owned();
        self.notifiers.insert(name, notifier);
    }

    /// Look up a notifier by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn DynNotifier>> {
        self.notifiers.get(name).cloned()
    }

    /// Return a sorted list of all registered notifier names.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.notifiers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Return the number of registered notifiers.
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Return `true` if no notifiers are registered.
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    /// Deliver one exception to every registered notifier, in name order.
    ///
    /// This runs on the host application's error-reporting path, so a failing
    /// notifier must never mask the exception being reported: each failure is
    /// logged and returned alongside the notifier's name, and delivery
    /// continues with the remaining notifiers.
    pub async fn notify_all(
        &self,
        exception: &ExceptionInfo,
        context: &NotificationContext,
    ) -> Vec<(String, Result<(), NotifierError>)> {
        let mut entries: Vec<_> = self.notifiers.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut results = Vec::with_capacity(entries.len());
        for (name, notifier) in entries {
            let result = notifier.notify(exception, context).await;
            if let Err(ref err) = result {
                error!(notifier = %name, error = %err, "notifier failed to deliver exception");
            }
            results.push((name.clone(), result));
        }
        results
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::notifier::Notifier;

    struct StubNotifier {
        stub_name: String,
        should_fail: bool,
        calls: AtomicUsize,
    }

    impl StubNotifier {
        fn new(name: &str) -> Self {
            Self {
                stub_name: name.to_owned(),
                should_fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(name: &str) -> Self {
            Self {
                should_fail: true,
                ..Self::new(name)
            }
        }
    }

    impl Notifier for StubNotifier {
        fn name(&self) -> &str {
            &self.stub_name
        }

        async fn notify(
            &self,
            _exception: &ExceptionInfo,
            _context: &NotificationContext,
        ) -> Result<(), NotifierError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.should_fail {
                return Err(NotifierError::Delivery("stub failure".into()));
            }
            Ok(())
        }

        async fn health_check(&self) -> Result<(), NotifierError> {
            Ok(())
        }
    }

    #[test]
    fn empty_registry() {
        let reg = NotifierRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(reg.list().is_empty());
    }

    #[test]
    fn register_and_get() {
        let mut reg = NotifierRegistry::new();
        reg.register(Arc::new(StubNotifier::new("slack")));
        reg.register(Arc::new(StubNotifier::new("email")));

        assert_eq!(reg.len(), 2);
        assert!(!reg.is_empty());

        let notifier = reg.get("slack").expect("slack notifier should exist");
        assert_eq!(notifier.name(), "slack");

        assert!(reg.get("pager").is_none());
    }

    #[test]
    fn list_sorted() {
        let mut reg = NotifierRegistry::new();
        reg.register(Arc::new(StubNotifier::new("slack")));
        reg.register(Arc::new(StubNotifier::new("email")));
        reg.register(Arc::new(StubNotifier::new("pager")));

        assert_eq!(reg.list(), vec!["email", "pager", "slack"]);
    }

    #[test]
    fn register_replaces_existing() {
        let mut reg = NotifierRegistry::new();
        reg.register(Arc::new(StubNotifier::new("slack")));
        reg.register(Arc::new(StubNotifier::new("slack")));
        assert_eq!(reg.len(), 1);
    }

    #[tokio::test]
    async fn notify_all_reaches_every_notifier() {
        let slack = Arc::new(StubNotifier::new("slack"));
        let email = Arc::new(StubNotifier::new("email"));

        let mut reg = NotifierRegistry::new();
        reg.register(slack.clone());
        reg.register(email.clone());

        let exception = ExceptionInfo::new("boom");
        let context = NotificationContext::new();
        let results = reg.notify_all(&exception, &context).await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|(_, r)| r.is_ok()));
        assert_eq!(slack.calls.load(Ordering::SeqCst), 1);
        assert_eq!(email.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn notify_all_isolates_failures() {
        let bad = Arc::new(StubNotifier::failing("bad"));
        let good = Arc::new(StubNotifier::new("good"));

        let mut reg = NotifierRegistry::new();
        reg.register(bad);
        reg.register(good.clone());

        let exception = ExceptionInfo::new("boom");
        let context = NotificationContext::new();
        let results = reg.notify_all(&exception, &context).await;

        // Name order: "bad" fails first, "good" is still delivered.
        assert_eq!(results[0].0, "bad");
        assert!(results[0].1.is_err());
        assert_eq!(results[1].0, "good");
        assert!(results[1].1.is_ok());
        assert_eq!(good.calls.load(Ordering::SeqCst), 1);
    }
}
