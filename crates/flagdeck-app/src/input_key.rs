//! Abstract input key event, independent of terminal library.
//!
//! This module defines the `InputKey` enum which abstracts keyboard input
//! from the underlying terminal library (crossterm). This keeps
//! flagdeck-app independent of terminal-specific types, so the handlers
//! can be exercised without a real terminal.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_eq!(InputKey::CharCtrl('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_input_key_clone() {
        let key = InputKey::Char('x');
        let cloned = key.clone();
        assert_eq!(key, cloned);
    }
}
