//! Test terminal helpers built on ratatui's TestBackend.

use ratatui::backend::{Backend, TestBackend};
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// In-memory terminal for widget assertions.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        Self {
            terminal: Terminal::new(backend).expect("test terminal"),
        }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().size().expect("backend size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw widget");
    }

    pub fn draw<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("draw frame");
    }

    /// All cell symbols joined row by row.
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().contains(needle)
    }
}
