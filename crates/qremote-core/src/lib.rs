//! # qremote-core — shared infrastructure
//!
//! Small substrate crate for the QuickRemote connection model:
//! - `observable` — value cells with change notification, the mechanism
//!   the profile model uses to make its invariant-enforcement side
//!   effects visible to the UI layer.

pub mod observable;

pub use observable::{Notifier, Observed};
