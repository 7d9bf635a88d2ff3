//! Core value types shared by all Faultline notifiers.
//!
//! A captured failure is represented as an [`ExceptionInfo`] plus a per-call
//! [`NotificationContext`]. Notifier crates (for example `faultline-slack`)
//! turn the pair into a delivery-specific payload; nothing in this crate
//! performs I/O.

pub mod backtrace;
pub mod context;
pub mod exception;
pub mod request;

pub use backtrace::{BacktraceCleaner, IdentityCleaner, SilencerCleaner};
pub use context::NotificationContext;
pub use exception::ExceptionInfo;
pub use request::RequestInfo;
