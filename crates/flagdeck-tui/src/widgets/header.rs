//! Header bar widget
//!
//! Shows the app title, the connected server, and the key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use flagdeck_app::AppState;

use crate::theme::{palette, styles};

/// Main header showing app title, server URL, and keybindings
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_style) = styles::phase_indicator(self.state.phase);

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled(
                "Flagdeck",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(
                self.state.settings.server.base_url.clone(),
                Style::default().fg(palette::TEXT_SECONDARY),
            ),
        ]);
        let left_width = left_line.width() as u16;

        let shortcuts = vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled("] Section  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] Edit  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit", styles::text_muted()),
        ];
        let shortcuts_line = Line::from(shortcuts);
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the key hints when they fit.
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width - 1;
            buf.set_line(x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use flagdeck_app::config::Settings;

    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_server() {
        let state = AppState::new(Settings::default());
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(&state), term.area());

        assert!(term.buffer_contains("Flagdeck"));
        assert!(term.buffer_contains("http://localhost:8080/"));
    }

    #[test]
    fn test_header_renders_keybindings_when_wide() {
        let state = AppState::new(Settings::default());
        let mut term = TestTerminal::with_size(120, 24);
        term.render_widget(MainHeader::new(&state), term.area());

        assert!(term.buffer_contains("[Tab] Section"));
        assert!(term.buffer_contains("[q] Quit"));
    }

    #[test]
    fn test_header_narrow_terminal_does_not_panic() {
        let state = AppState::new(Settings::default());
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(MainHeader::new(&state), term.area());
        assert!(term.buffer_contains("Flagdeck"));
    }
}
