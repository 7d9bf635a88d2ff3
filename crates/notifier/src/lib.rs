//! Notifier abstractions for the Faultline exception notification toolkit.
//!
//! A notifier turns one captured exception plus its context into one
//! delivered message. Implementations live in integration crates (for
//! example `faultline-slack`); this crate defines the [`Notifier`] trait,
//! the [`NotifierError`] taxonomy, and a [`NotifierRegistry`] for fanning a
//! failure out to every configured destination.

pub mod error;
pub mod notifier;
pub mod registry;

pub use error::NotifierError;
pub use notifier::{DynNotifier, Notifier};
pub use registry::NotifierRegistry;
