//! Message types for the application (TEA pattern)

use flagdeck_client::StatsReply;
use flagdeck_core::GroupId;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Bootstrap Messages
    // ─────────────────────────────────────────────────────────
    /// The stats fetch returned a decoded reply (data or server errors)
    StatsLoaded(StatsReply),

    /// The stats fetch itself failed (transport or malformed body)
    StatsFetchFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move cursor to the next control
    SelectNext,
    /// Move cursor to the previous control
    SelectPrev,
    /// Jump to the first control of the next section
    NextSection,
    /// Jump to the first control of the previous section
    PrevSection,

    // ─────────────────────────────────────────────────────────
    // Control Edit Messages
    // ─────────────────────────────────────────────────────────
    /// Flip the show flag for a group (a finalized edit)
    ToggleShow { group: GroupId },

    /// Cycle the top-level debug type selector (a finalized edit)
    CycleDebugType { forward: bool },

    /// Begin stepwise editing of a group's color control
    StartColorEdit { group: GroupId },

    /// Switch the channel the next color nudge applies to
    ColorChannel { forward: bool },

    /// Nudge the active channel; every nudge is an intermediate change
    ColorNudge { delta: i16 },

    /// Leave color edit mode (the edits are already applied)
    EndColorEdit,

    // ─────────────────────────────────────────────────────────
    // Alert Messages
    // ─────────────────────────────────────────────────────────
    /// Dismiss the blocking alert
    DismissAlert,
}
