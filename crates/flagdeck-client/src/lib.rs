//! # flagdeck-client - Server I/O
//!
//! Talks to the debug server: fetches the flag group mapping from the
//! stats endpoint and pushes operator edits back out.
//!
//! Depends on [`flagdeck_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Stats Endpoint
//! - [`StatsClient`] - One-shot `GET /stats` with timeout
//! - [`StatsReply`] - Tagged reply: group mapping or server error payload
//! - [`GroupMap`] - Raw group key -> opaque usage data
//!
//! ### Outbound Notifications
//! - [`Notifier`] - Interface the change dispatcher forwards edits to
//! - [`HttpNotifier`] - JSON-POSTing implementation

pub mod notify;
pub mod protocol;
pub mod stats;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use notify::{HttpNotifier, Notifier};
pub use protocol::{error_details, GroupMap, StatsReply};
pub use stats::{StatsClient, DEFAULT_TIMEOUT};
