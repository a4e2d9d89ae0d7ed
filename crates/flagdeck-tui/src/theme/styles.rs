//! Semantic style builders for the panel theme.

use flagdeck_app::AppPhase;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---
pub fn selected_highlight() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Rounded bordered container, border color tracking focus.
pub fn panel_block(active: bool) -> Block<'static> {
    let border = if active {
        border_active()
    } else {
        border_inactive()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

/// Status dot and style for the current lifecycle phase.
pub fn phase_indicator(phase: AppPhase) -> (&'static str, Style) {
    match phase {
        AppPhase::Loading => ("◌", Style::default().fg(palette::STATUS_YELLOW)),
        AppPhase::Ready => ("●", Style::default().fg(palette::STATUS_GREEN)),
        AppPhase::Failed => ("●", Style::default().fg(palette::STATUS_RED)),
        AppPhase::Quitting => ("○", Style::default().fg(palette::TEXT_MUTED)),
    }
}
