//! Color palette for the panel theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text
pub const TEXT_BRIGHT: Color = Color::White; // Bright/emphasis text

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Ready/success
pub const STATUS_RED: Color = Color::Red; // Error/failed
pub const STATUS_YELLOW: Color = Color::Yellow; // Loading/keybindings
