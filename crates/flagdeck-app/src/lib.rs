//! # flagdeck-app - Application state and orchestration for Flagdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: all state lives in [`AppState`], every input becomes a
//! [`Message`], [`update()`] is the only place state mutates, and outbound
//! side effects come back as [`UpdateAction`]s executed by the change
//! dispatcher. It also hosts the panel builder (one section per
//! server-discovered flag group) behind the toolkit-free [`PanelHost`]
//! capability, bootstrap helpers, and the ambient TOML configuration.

pub mod bootstrap;
pub mod builder;
pub mod config;
pub mod dispatch;
pub mod flag_info;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod panel;
pub mod state;

// Re-export primary types
pub use config::{load_settings, Settings};
pub use flag_info::{FlagInfoRow, FlagInfoView};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use panel::{ControlKind, PanelHost, PanelSection, PanelState};
pub use state::{AlertState, AppPhase, AppState, ColorEditState, Selection};

// Re-export client types the TUI needs
pub use flagdeck_client::{HttpNotifier, Notifier, StatsClient, StatsReply};
