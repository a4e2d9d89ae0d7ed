//! Widget library for the Flagdeck TUI.

pub mod alert;
pub mod flag_info;
pub mod header;
pub mod panel;
pub mod status_bar;

pub use alert::AlertModal;
pub use flag_info::FlagInfoPanel;
pub use header::MainHeader;
pub use panel::PanelView;
pub use status_bar::StatusBar;
