//! Main update function - handles state transitions (TEA pattern)
//!
//! The update function is the only place the shared config mutates. The
//! outbound side effects (notifications) are returned as actions and
//! executed by the change dispatcher, never here.

use flagdeck_client::{error_details, StatsReply};
use flagdeck_core::{Channel, Rgb};
use tracing::{debug, error, info, warn};

use crate::builder;
use crate::flag_info::FlagInfoView;
use crate::message::Message;
use crate::state::{AppPhase, AppState, ColorEditState};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Alert title used for every load-path failure.
const LOAD_ALERT_TITLE: &str = "Problem loading flags from server";

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Bootstrap Messages
        // ─────────────────────────────────────────────────────────
        Message::StatsLoaded(reply) => handle_stats_loaded(state, reply),

        Message::StatsFetchFailed { error } => {
            error!("Stats fetch failed: {error}");
            state.show_alert(LOAD_ALERT_TITLE, error);
            state.phase = AppPhase::Failed;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrev => {
            state.select_prev();
            UpdateResult::none()
        }
        Message::NextSection => {
            state.select_next_section();
            UpdateResult::none()
        }
        Message::PrevSection => {
            state.select_prev_section();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Control Edit Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleShow { group } => match state.config.toggle_show(&group) {
            Some(enabled) => {
                debug!("Toggled '{group}' to {enabled}");
                UpdateResult::action(UpdateAction::NotifyFlagChange { group, enabled })
            }
            None => {
                warn!("Toggle for unknown group '{group}' ignored");
                UpdateResult::none()
            }
        },

        Message::CycleDebugType { forward } => {
            let current = state.config.debug_type;
            state.config.debug_type = if forward {
                current.next()
            } else {
                current.prev()
            };
            debug!("Debug type set to {}", state.config.debug_type);
            UpdateResult::action(UpdateAction::RefreshStyle {
                debug_type: state.config.debug_type,
            })
        }

        Message::StartColorEdit { group } => {
            if state.config.contains(&group) {
                state.color_edit = Some(ColorEditState {
                    group,
                    channel: Channel::Red,
                });
            } else {
                warn!("Color edit for unknown group '{group}' ignored");
            }
            UpdateResult::none()
        }

        Message::ColorChannel { forward } => {
            if let Some(edit) = state.color_edit.as_mut() {
                edit.channel = if forward {
                    edit.channel.next()
                } else {
                    edit.channel.prev()
                };
            }
            UpdateResult::none()
        }

        Message::ColorNudge { delta } => handle_color_nudge(state, delta),

        Message::EndColorEdit => {
            // Every nudge was already applied and dispatched; leaving the
            // mode has nothing left to send.
            state.color_edit = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Alert Messages
        // ─────────────────────────────────────────────────────────
        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }
    }
}

/// Success path of the bootstrap fetch: build the panel, then the
/// flag-info view. A server `errors` payload takes the failure path.
fn handle_stats_loaded(state: &mut AppState, reply: StatsReply) -> UpdateResult {
    match reply {
        StatsReply::Data(groups) => {
            info!("Stats loaded: {} flag group(s)", groups.len());
            match builder::build(&groups, &mut state.config, &mut state.panel) {
                Ok(()) => {
                    state.flag_info = Some(FlagInfoView::from_response(&groups));
                    state.phase = AppPhase::Ready;
                }
                Err(e) => {
                    // Fail-stop: already-built sections stay usable, the
                    // rest of the build (including flag info) is skipped.
                    error!("Panel construction failed: {e}");
                    state.show_alert("Panel construction failed", e.to_string());
                    state.phase = AppPhase::Ready;
                }
            }
            UpdateResult::none()
        }
        StatsReply::Errors(errors) => {
            let details = error_details(&errors);
            error!("Server reported errors: {details}");
            state.show_alert(LOAD_ALERT_TITLE, details);
            state.phase = AppPhase::Failed;
            UpdateResult::none()
        }
    }
}

/// Apply one intermediate color adjustment and dispatch it.
fn handle_color_nudge(state: &mut AppState, delta: i16) -> UpdateResult {
    let Some(edit) = state.color_edit.as_ref() else {
        return UpdateResult::none();
    };
    let group = edit.group.clone();
    let channel = edit.channel;

    let Some(current) = state.config.color(&group) else {
        warn!("Color nudge for unknown group '{group}' ignored");
        return UpdateResult::none();
    };

    let next: Rgb = current.nudged(channel, delta);
    if next == current {
        // Saturated at the channel boundary; nothing changed, nothing to send.
        return UpdateResult::none();
    }
    state.config.set_color(&group, next);
    UpdateResult::action(UpdateAction::NotifyColorChange { group, color: next })
}
