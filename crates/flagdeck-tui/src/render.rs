//! Frame composition: header / panel + flag info / status bar, with the
//! blocking alert modal on top when present.

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use flagdeck_app::AppState;

use crate::widgets::{AlertModal, FlagInfoPanel, MainHeader, PanelView, StatusBar};

/// Draw one frame of the UI.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(5),    // Body
        Constraint::Length(3), // Status bar
    ])
    .split(frame.area());

    frame.render_widget(MainHeader::new(state), chunks[0]);

    let body = Layout::horizontal([
        Constraint::Percentage(55), // Control panel
        Constraint::Percentage(45), // Flag info
    ])
    .split(chunks[1]);

    frame.render_widget(PanelView::new(state), body[0]);
    frame.render_widget(FlagInfoPanel::new(state), body[1]);

    frame.render_widget(StatusBar::new(state), chunks[2]);

    if let Some(alert) = &state.alert {
        frame.render_widget(AlertModal::new(alert), frame.area());
    }
}
