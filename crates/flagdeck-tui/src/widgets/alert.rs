//! Blocking alert modal.
//!
//! Errors that must reach the operator (load failures, panel build
//! failures) render as a centered modal over a dimmed backdrop. The rest
//! of the UI stays visible but inert until the alert is acknowledged.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use flagdeck_app::AlertState;

use crate::theme::{palette, styles};

/// Center a fixed-size rect within an area, clamping to its bounds.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area to push the background back.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// The blocking alert modal, rendered over the whole frame.
pub struct AlertModal<'a> {
    alert: &'a AlertState,
}

impl<'a> AlertModal<'a> {
    pub fn new(alert: &'a AlertState) -> Self {
        Self { alert }
    }
}

impl Widget for AlertModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let width = (area.width.saturating_sub(8)).min(64).max(20);
        let height = 8;
        let modal = centered_rect(width, height, area);

        Clear.render(modal, buf);
        let block = styles::panel_block(true)
            .title(Span::styled(
                format!(" {} ", self.alert.title),
                styles::status_red(),
            ))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 {
            return;
        }

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.alert.details.clone(),
                styles::text_primary(),
            )),
        ];
        // Footer hint pinned under the message.
        while (lines.len() as u16) < inner.height.saturating_sub(1) {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] Dismiss", styles::text_muted()),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::TestTerminal;

    #[test]
    fn test_centered_rect_centers_and_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        // Oversized request clamps to the area.
        assert_eq!(centered_rect(200, 50, area), Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_alert_modal_renders_title_details_and_hint() {
        let alert = AlertState {
            title: "Problem loading flags from server".to_string(),
            details: "db down".to_string(),
        };

        let mut term = TestTerminal::new();
        term.render_widget(AlertModal::new(&alert), term.area());

        assert!(term.buffer_contains("Problem loading flags from server"));
        assert!(term.buffer_contains("db down"));
        assert!(term.buffer_contains("[Enter] Dismiss"));
    }
}
