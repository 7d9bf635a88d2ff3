use async_trait::async_trait;
use faultline_core::{ExceptionInfo, NotificationContext};

use crate::error::NotifierError;

/// Strongly-typed notifier trait with native `async fn`.
///
/// This trait is **not** object-safe because it uses native `async fn`
/// methods (which desugar to opaque `impl Future` return types). If you need
/// dynamic dispatch, use [`DynNotifier`] instead -- every `Notifier`
/// automatically implements `DynNotifier` via a blanket implementation.
pub trait Notifier: Send + Sync {
    /// Returns the unique name of this notifier.
    fn name(&self) -> &str;

    /// Deliver one exception to this notifier's destination.
    ///
    /// Performs exactly one outbound send; a failure is returned to the
    /// caller, never retried or queued.
    fn notify(
        &self,
        exception: &ExceptionInfo,
        context: &NotificationContext,
    ) -> impl std::future::Future<Output = Result<(), NotifierError>> + Send;

    /// Verify the notifier is ready to deliver.
    fn health_check(&self) -> impl std::future::Future<Output = Result<(), NotifierError>> + Send;
}

/// Object-safe notifier trait for use behind `Arc<dyn DynNotifier>`.
///
/// Uses [`macro@async_trait`] to enable dynamic dispatch of async methods.
/// You generally should not implement this trait directly -- instead
/// implement [`Notifier`] and rely on the blanket implementation.
#[async_trait]
pub trait DynNotifier: Send + Sync {
    /// Returns the unique name of this notifier.
    fn name(&self) -> &str;

    /// Deliver one exception to this notifier's destination.
    async fn notify(
        &self,
        exception: &ExceptionInfo,
        context: &NotificationContext,
    ) -> Result<(), NotifierError>;

    /// Verify the notifier is ready to deliver.
    async fn health_check(&self) -> Result<(), NotifierError>;
}

/// Blanket implementation: any type that implements [`Notifier`] also
/// implements [`DynNotifier`], bridging the static and dynamic dispatch
/// worlds.
#[async_trait]
impl<T: Notifier + Sync> DynNotifier for T {
    fn name(&self) -> &str {
        Notifier::name(self)
    }

    async fn notify(
        &self,
        exception: &ExceptionInfo,
        context: &NotificationContext,
    ) -> Result<(), NotifierError> {
        Notifier::notify(self, exception, context).await
    }

    async fn health_check(&self) -> Result<(), NotifierError> {
        Notifier::health_check(self).await
    }
}
