//! Flag usage overview rendered beside the control panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use flagdeck_app::{AppState, FlagInfoView};
use flagdeck_core::Rgb;

use crate::theme::{palette, styles};

/// Usage overview: one row per group with its live panel color.
pub struct FlagInfoPanel<'a> {
    state: &'a AppState,
}

impl<'a> FlagInfoPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn rows(&self, view: &FlagInfoView, width: usize) -> Vec<Line<'static>> {
        view.rows
            .iter()
            .map(|row| {
                // The dot tracks the group's current panel color.
                let color = self
                    .state
                    .config
                    .color(&row.id)
                    .unwrap_or(Rgb::DEFAULT);
                let label = format!("{} ", row.label);
                let used = 2 + label.width();
                let summary = fit_width(&row.summary, width.saturating_sub(used));
                Line::from(vec![
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Rgb(color.r, color.g, color.b)),
                    ),
                    Span::styled(label, styles::text_primary()),
                    Span::styled(summary, styles::text_muted()),
                ])
            })
            .collect()
    }
}

impl Widget for FlagInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false)
            .title(Span::styled(" Flag Info ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match &self.state.flag_info {
            Some(view) if view.is_empty() => {
                vec![Line::from(Span::styled(
                    "Server reported no flag groups",
                    styles::text_muted(),
                ))]
            }
            Some(view) => self.rows(view, inner.width as usize),
            None => vec![Line::from(Span::styled(
                "Waiting for server…",
                styles::text_muted(),
            ))],
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 2 > max {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use flagdeck_app::config::Settings;
    use flagdeck_app::{builder, FlagInfoView};
    use flagdeck_client::StatsReply;

    use crate::test_utils::TestTerminal;

    fn state_with_info(body: &str) -> AppState {
        let mut state = AppState::new(Settings::default());
        let StatsReply::Data(groups) = StatsReply::parse(body).unwrap() else {
            panic!("expected data reply");
        };
        builder::build(&groups, &mut state.config, &mut state.panel).unwrap();
        state.flag_info = Some(FlagInfoView::from_response(&groups));
        state
    }

    #[test]
    fn test_renders_rows_with_summaries() {
        let state = state_with_info(r#"{"data":{"cpu_limit":{"count":3}}}"#);
        let mut term = TestTerminal::new();
        term.render_widget(FlagInfoPanel::new(&state), term.area());

        assert!(term.buffer_contains("Flag Info"));
        assert!(term.buffer_contains("Cpu Limit"));
        assert!(term.buffer_contains(r#"{"count":3}"#));
    }

    #[test]
    fn test_renders_waiting_placeholder_before_fetch() {
        let state = AppState::new(Settings::default());
        let mut term = TestTerminal::new();
        term.render_widget(FlagInfoPanel::new(&state), term.area());
        assert!(term.buffer_contains("Waiting for server"));
    }

    #[test]
    fn test_renders_empty_mapping_notice() {
        let state = state_with_info(r#"{"data":{}}"#);
        let mut term = TestTerminal::new();
        term.render_widget(FlagInfoPanel::new(&state), term.area());
        assert!(term.buffer_contains("no flag groups"));
    }

    #[test]
    fn test_fit_width_truncates() {
        assert_eq!(fit_width("short", 10), "short");
        let cut = fit_width("a very long summary string", 10);
        assert!(cut.width() <= 10);
        assert!(cut.ends_with('…'));
    }
}
