//! Handler module - TEA update function and key routing
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event routing for the panel modes

pub(crate) mod keys;
pub(crate) mod update;


use flagdeck_core::{DebugType, GroupId, Rgb};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
///
/// Each one is forwarded to the outbound notification interface by the
/// change dispatcher; none of them touches the local model again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// A group's show flag was toggled (fires once per finalized edit)
    NotifyFlagChange { group: GroupId, enabled: bool },

    /// A group's color changed (fires once per intermediate value)
    NotifyColorChange { group: GroupId, color: Rgb },

    /// The top-level debug type selector changed; refresh the server-side
    /// style/view emphasis
    RefreshStyle { debug_type: DebugType },
}

/// Result of processing a message: an optional follow-up message and/or
/// an action for the event loop
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
