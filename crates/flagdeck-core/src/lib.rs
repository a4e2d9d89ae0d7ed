//! # flagdeck-core - Core Domain Types
//!
//! Foundation crate for Flagdeck. Provides the shared panel configuration
//! model, group name normalization, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Config Model (`model`)
//! - [`PanelConfig`] - The shared mutable record behind every panel control
//! - [`GroupSettings`] - Paired show/color state for one flag group
//! - [`GroupId`] - Canonical (lowercased) group identifier
//! - [`DebugType`] - Top-level debug view selector (permissions/flags/speeds)
//! - [`Rgb`], [`Channel`] - Color value and editable channel
//!
//! ### Name Normalization (`normalize`)
//! - [`normalize()`] - Raw server key -> display label + canonical id
//! - [`GroupName`] - The derived label/id pair
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use flagdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod model;
pub mod normalize;

/// Prelude for common imports used throughout all Flagdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use model::{Channel, DebugType, GroupId, GroupSettings, PanelConfig, Rgb};
pub use normalize::{normalize, GroupName};
