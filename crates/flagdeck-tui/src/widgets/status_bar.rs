//! Status bar: lifecycle phase, group count, and contextual key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use flagdeck_app::AppState;

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hint(&self) -> &'static str {
        if self.state.alert.is_some() {
            "Enter dismiss"
        } else if self.state.color_edit.is_some() {
            "◂ ▸ channel   ↑ ↓ adjust   Enter done"
        } else {
            "↑ ↓ move   Tab section   Enter activate"
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, icon_style) = styles::phase_indicator(self.state.phase);
        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, icon_style),
            Span::styled(
                format!(" {}", self.state.phase.label()),
                styles::text_primary(),
            ),
            Span::styled(
                format!("  {} group(s)", self.state.config.len()),
                styles::text_secondary(),
            ),
            Span::styled(format!("   {}", self.hint()), styles::text_muted()),
        ]);
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the active debug view.
        let view_line = Line::from(vec![
            Span::styled("view: ", styles::text_muted()),
            Span::styled(
                self.state.config.debug_type.as_str(),
                styles::accent_bold(),
            ),
            Span::raw(" "),
        ]);
        let view_width = view_line.width() as u16;
        if left_line.width() as u16 + view_width + 2 <= inner.width {
            let x = inner.x + inner.width - view_width;
            buf.set_line(x, inner.y, &view_line, view_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use flagdeck_app::config::Settings;
    use flagdeck_app::state::AppPhase;

    use crate::test_utils::TestTerminal;

    #[test]
    fn test_status_bar_shows_phase_and_count() {
        let mut state = AppState::new(Settings::default());
        state.phase = AppPhase::Ready;

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Ready"));
        assert!(term.buffer_contains("0 group(s)"));
        assert!(term.buffer_contains("view: permissions"));
    }

    #[test]
    fn test_status_bar_hint_changes_during_color_edit() {
        let mut state = AppState::new(Settings::default());
        state.color_edit = Some(flagdeck_app::ColorEditState {
            group: flagdeck_core::GroupId::from_raw("walk"),
            channel: flagdeck_core::Channel::Red,
        });

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("channel"));
        assert!(term.buffer_contains("adjust"));
    }
}
