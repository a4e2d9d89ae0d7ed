//! Application state (Model in TEA pattern)

use flagdeck_core::{Channel, GroupId, PanelConfig};

use crate::config::Settings;
use crate::flag_info::FlagInfoView;
use crate::panel::{ControlKind, PanelSection, PanelState};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Waiting for the initial stats fetch
    #[default]
    Loading,

    /// Panel built, controls live
    Ready,

    /// The stats fetch failed or the server reported errors; terminal
    /// for this session (no retry), the operator can only read and quit
    Failed,

    /// Shutting down
    Quitting,
}

impl AppPhase {
    /// Short human-readable label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            AppPhase::Loading => "Loading",
            AppPhase::Ready => "Ready",
            AppPhase::Failed => "Failed",
            AppPhase::Quitting => "Quitting",
        }
    }
}

/// A blocking operator-visible alert (modal over the whole UI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub details: String,
}

/// Which control the cursor is on.
///
/// The top-level debug type selector is always present; group controls
/// exist only after the panel is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    DebugType,
    Control {
        section: usize,
        control: usize,
    },
}

/// Active stepwise color edit: the group being edited and the channel
/// the next nudge applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEditState {
    pub group: GroupId,
    pub channel: Channel,
}

/// The full application state for one panel session.
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// The shared mutable configuration every control is bound to.
    pub config: PanelConfig,

    /// Panel structure built from the server's group mapping.
    pub panel: PanelState,

    /// Usage overview, present after a successful fetch.
    pub flag_info: Option<FlagInfoView>,

    /// Blocking alert, when an error has been surfaced.
    pub alert: Option<AlertState>,

    pub selection: Selection,

    /// Present while a color control is being edited.
    pub color_edit: Option<ColorEditState>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Surface a blocking alert to the operator.
    pub fn show_alert(&mut self, title: impl Into<String>, details: impl Into<String>) {
        self.alert = Some(AlertState {
            title: title.into(),
            details: details.into(),
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    /// The section/control pair under the cursor, if any.
    pub fn selected_control(&self) -> Option<(&PanelSection, ControlKind)> {
        match self.selection {
            Selection::DebugType => None,
            Selection::Control { section, control } => {
                let section = self.panel.section(section)?;
                let kind = *section.controls.get(control)?;
                Some((section, kind))
            }
        }
    }

    /// Move the cursor to the next control (selector first, then each
    /// section's controls in order). Sticks at the last control.
    pub fn select_next(&mut self) {
        self.selection = match self.selection {
            Selection::DebugType => {
                if self.panel.is_empty() {
                    Selection::DebugType
                } else {
                    Selection::Control {
                        section: 0,
                        control: 0,
                    }
                }
            }
            Selection::Control { section, control } => {
                let controls = self
                    .panel
                    .section(section)
                    .map(|s| s.controls.len())
                    .unwrap_or(0);
                if control + 1 < controls {
                    Selection::Control {
                        section,
                        control: control + 1,
                    }
                } else if section + 1 < self.panel.section_count() {
                    Selection::Control {
                        section: section + 1,
                        control: 0,
                    }
                } else {
                    Selection::Control { section, control }
                }
            }
        };
    }

    /// Move the cursor to the previous control. Sticks at the selector.
    pub fn select_prev(&mut self) {
        self.selection = match self.selection {
            Selection::DebugType => Selection::DebugType,
            Selection::Control { section, control } => {
                if control > 0 {
                    Selection::Control {
                        section,
                        control: control - 1,
                    }
                } else if section > 0 {
                    let prev = section - 1;
                    let last = self
                        .panel
                        .section(prev)
                        .map(|s| s.controls.len().saturating_sub(1))
                        .unwrap_or(0);
                    Selection::Control {
                        section: prev,
                        control: last,
                    }
                } else {
                    Selection::DebugType
                }
            }
        };
    }

    /// Jump to the first control of the next section.
    pub fn select_next_section(&mut self) {
        let target = match self.selection {
            Selection::DebugType => 0,
            Selection::Control { section, .. } => section + 1,
        };
        if target < self.panel.section_count() {
            self.selection = Selection::Control {
                section: target,
                control: 0,
            };
        }
    }

    /// Jump to the first control of the previous section (or back to the
    /// selector from the first section).
    pub fn select_prev_section(&mut self) {
        self.selection = match self.selection {
            Selection::DebugType => Selection::DebugType,
            Selection::Control { section: 0, .. } => Selection::DebugType,
            Selection::Control { section, .. } => Selection::Control {
                section: section - 1,
                control: 0,
            },
        };
    }
}
