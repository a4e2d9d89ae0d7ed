//! The control panel widget: debug type selector plus one section per
//! flag group, each with a show toggle and a color control.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use flagdeck_app::{AppState, ControlKind, PanelSection, Selection};
use flagdeck_core::{Channel, GroupId, Rgb};

use crate::theme::{palette, styles};

/// The scrolling control panel on the left of the screen.
pub struct PanelView<'a> {
    state: &'a AppState,
}

impl<'a> PanelView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Zero-based line index of the currently selected control, used to
    /// keep the cursor visible when the panel scrolls.
    fn selected_line(&self) -> usize {
        match self.state.selection {
            Selection::DebugType => 0,
            Selection::Control { section, control } => {
                // Selector row + blank, then per preceding section a header
                // plus its controls.
                let mut line = 2;
                for s in self.state.panel.sections().iter().take(section) {
                    line += 1 + s.controls.len();
                }
                line + 1 + control
            }
        }
    }

    fn selector_line(&self) -> Line<'static> {
        let selected = self.state.selection == Selection::DebugType;
        let value_style = if selected {
            styles::selected_highlight()
        } else {
            styles::accent_bold()
        };
        Line::from(vec![
            Span::styled("Debug type ", styles::text_primary()),
            Span::styled(
                format!("◂ {} ▸", self.state.config.debug_type),
                value_style,
            ),
        ])
    }

    fn toggle_line(&self, group: &GroupId, selected: bool) -> Line<'static> {
        let show = self.state.config.show(group).unwrap_or(false);
        let mark = if show { "[x]" } else { "[ ]" };
        let style = if selected {
            styles::selected_highlight()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{mark} show"), style),
        ])
    }

    fn color_line(&self, group: &GroupId, selected: bool) -> Line<'static> {
        let color = self.state.config.color(group).unwrap_or(Rgb::DEFAULT);
        let label_style = if selected {
            styles::selected_highlight()
        } else {
            styles::text_primary()
        };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled("color ", label_style),
            Span::styled(
                "███",
                Style::default().fg(Color::Rgb(color.r, color.g, color.b)),
            ),
            Span::styled(format!(" {}", color.to_hex()), styles::text_secondary()),
        ];

        // Channel editor, visible while this group's color is being edited.
        if let Some(edit) = &self.state.color_edit {
            if &edit.group == group {
                spans.push(Span::raw("  "));
                for channel in [Channel::Red, Channel::Green, Channel::Blue] {
                    let value = color.channel(channel);
                    let style = if channel == edit.channel {
                        styles::selected_highlight()
                    } else {
                        styles::text_muted()
                    };
                    spans.push(Span::styled(
                        format!("{}:{value:03} ", channel.label()),
                        style,
                    ));
                }
            }
        }

        Line::from(spans)
    }

    fn section_lines(&self, index: usize, section: &PanelSection) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            format!("▸ {}", section.label),
            styles::accent_bold(),
        ))];
        for (ci, control) in section.controls.iter().enumerate() {
            let selected = self.state.selection
                == Selection::Control {
                    section: index,
                    control: ci,
                };
            lines.push(match control {
                ControlKind::Toggle => self.toggle_line(&section.group, selected),
                ControlKind::Color => self.color_line(&section.group, selected),
            });
        }
        lines
    }
}

impl Widget for PanelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.state.alert.is_none())
            .title(Span::styled(" Debug Panel ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![self.selector_line(), Line::default()];
        if self.state.panel.is_empty() {
            lines.push(Line::from(Span::styled(
                "No flag groups",
                styles::text_muted(),
            )));
        } else {
            for (si, section) in self.state.panel.sections().iter().enumerate() {
                lines.extend(self.section_lines(si, section));
            }
        }

        // Keep the selected control inside the viewport.
        let selected = self.selected_line();
        let height = inner.height as usize;
        let offset = selected.saturating_sub(height.saturating_sub(1));

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}
