//! # flagdeck-tui - Terminal UI for Flagdeck
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! event polling, the main event loop over the flagdeck-app handlers,
//! and the widget set (panel, flag info, header, status bar, alert).

pub mod event;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
