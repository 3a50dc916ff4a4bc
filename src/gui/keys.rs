//! gui/keys.rs
//! Raw key presses -> `Shortcut`.
//!
//! Whether a shortcut is *bound* depends on the mode; that check happens in
//! update/chrome.rs against `Chrome::shortcuts`.

use iced::keyboard::{Key, Modifiers, key::Named};

use super::state::Shortcut;

pub(crate) fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key {
        Key::Named(Named::Escape) => Some(Shortcut::Escape),
        Key::Named(Named::Space) if modifiers.is_empty() => Some(Shortcut::PlayPause),
        Key::Character(c) => {
            let c = c.as_str();
            if modifiers.command() {
                match c {
                    "o" | "O" => Some(Shortcut::Open),
                    "s" | "S" => Some(Shortcut::Search),
                    _ => None,
                }
            } else if modifiers.is_empty() && c == "f" {
                Some(Shortcut::Fullscreen)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn test_plain_keys() {
        let none = Modifiers::empty();
        assert_eq!(
            shortcut_for(&Key::Named(Named::Space), none),
            Some(Shortcut::PlayPause)
        );
        assert_eq!(shortcut_for(&ch("f"), none), Some(Shortcut::Fullscreen));
        assert_eq!(
            shortcut_for(&Key::Named(Named::Escape), none),
            Some(Shortcut::Escape)
        );
        assert_eq!(shortcut_for(&ch("o"), none), None);
    }

    #[test]
    fn test_command_keys() {
        let cmd = Modifiers::COMMAND;
        assert_eq!(shortcut_for(&ch("o"), cmd), Some(Shortcut::Open));
        assert_eq!(shortcut_for(&ch("s"), cmd), Some(Shortcut::Search));
        assert_eq!(shortcut_for(&ch("f"), cmd), None);
        assert_eq!(shortcut_for(&Key::Named(Named::Space), cmd), None);
    }
}
