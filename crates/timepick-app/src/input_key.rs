//! Abstract input key event, independent of any host toolkit.
//!
//! Hosts translate their native key events (DOM `keyup`, terminal key
//! events, ...) into `InputKey` at the boundary, so the picker never depends
//! on a particular event library.

/// Abstract key released in the bound field or on the slot list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (digits, letters, separators)
    Char(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}

impl InputKey {
    /// Parse a key name as hosts spell it (`"down"`, `"ArrowDown"`, `"Escape"`,
    /// or a single character).
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.to_ascii_lowercase().as_str() {
            "up" | "arrowup" => InputKey::Up,
            "down" | "arrowdown" => InputKey::Down,
            "left" | "arrowleft" => InputKey::Left,
            "right" | "arrowright" => InputKey::Right,
            "enter" | "return" => InputKey::Enter,
            "esc" | "escape" => InputKey::Esc,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => InputKey::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}
