//! Key event routing.
//!
//! Translates abstract input keys into semantic messages based on the
//! current state: the blocking alert swallows everything first, then an
//! active color edit, then the cursor position decides what Enter/Space
//! mean. The finalize-vs-intermediate distinction lives here: a toggle
//! keypress IS the finalized edit, while every nudge inside a color edit
//! is an intermediate change.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::panel::ControlKind;
use crate::state::{AppState, Selection};

/// Small nudge applied by the arrow keys during a color edit.
const COLOR_STEP: i16 = 5;
/// Large nudge applied by page up/down during a color edit.
const COLOR_STEP_LARGE: i16 = 25;

/// Route a key press to a semantic message, if any.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // The alert is blocking: it must be acknowledged before anything else.
    if state.alert.is_some() {
        return match key {
            InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
            InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
            _ => None,
        };
    }

    // Ctrl+C always quits.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    // An active color edit captures the navigation keys.
    if state.color_edit.is_some() {
        return match key {
            InputKey::Left => Some(Message::ColorChannel { forward: false }),
            InputKey::Right => Some(Message::ColorChannel { forward: true }),
            InputKey::Up => Some(Message::ColorNudge { delta: COLOR_STEP }),
            InputKey::Down => Some(Message::ColorNudge { delta: -COLOR_STEP }),
            InputKey::PageUp => Some(Message::ColorNudge {
                delta: COLOR_STEP_LARGE,
            }),
            InputKey::PageDown => Some(Message::ColorNudge {
                delta: -COLOR_STEP_LARGE,
            }),
            InputKey::Enter | InputKey::Esc => Some(Message::EndColorEdit),
            _ => None,
        };
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Tab => Some(Message::NextSection),
        InputKey::BackTab => Some(Message::PrevSection),

        InputKey::Left => match state.selection {
            Selection::DebugType => Some(Message::CycleDebugType { forward: false }),
            _ => None,
        },
        InputKey::Right => match state.selection {
            Selection::DebugType => Some(Message::CycleDebugType { forward: true }),
            _ => None,
        },

        InputKey::Enter | InputKey::Char(' ') => activate_selected(state),

        _ => None,
    }
}

/// Enter/Space activates whatever the cursor is on.
fn activate_selected(state: &AppState) -> Option<Message> {
    match state.selection {
        Selection::DebugType => Some(Message::CycleDebugType { forward: true }),
        Selection::Control { .. } => {
            let (section, kind) = state.selected_control()?;
            let group = section.group.clone();
            match kind {
                ControlKind::Toggle => Some(Message::ToggleShow { group }),
                ControlKind::Color => Some(Message::StartColorEdit { group }),
            }
        }
    }
}
