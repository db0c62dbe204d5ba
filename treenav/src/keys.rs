//! Navigation keys understood by the tree.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TreeError;

/// Keys that drive tree navigation and activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
}

impl TreeKey {
    /// Key name as used in DOM `KeyboardEvent.key` values.
    pub fn name(self) -> &'static str {
        match self {
            TreeKey::ArrowUp => "ArrowUp",
            TreeKey::ArrowDown => "ArrowDown",
            TreeKey::ArrowLeft => "ArrowLeft",
            TreeKey::ArrowRight => "ArrowRight",
            TreeKey::Home => "Home",
            TreeKey::End => "End",
            TreeKey::Enter => "Enter",
            TreeKey::Space => "Space",
        }
    }

    /// Convert a terminal key event.
    ///
    /// Returns `None` for releases, for keys the tree does not handle, and
    /// when Ctrl or Alt is held (those combos belong to the host).
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match event.code {
            KeyCode::Up => Some(TreeKey::ArrowUp),
            KeyCode::Down => Some(TreeKey::ArrowDown),
            KeyCode::Left => Some(TreeKey::ArrowLeft),
            KeyCode::Right => Some(TreeKey::ArrowRight),
            KeyCode::Home => Some(TreeKey::Home),
            KeyCode::End => Some(TreeKey::End),
            KeyCode::Enter => Some(TreeKey::Enter),
            KeyCode::Char(' ') => Some(TreeKey::Space),
            _ => None,
        }
    }
}

impl fmt::Display for TreeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeKey {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowUp" | "Up" => Ok(TreeKey::ArrowUp),
            "ArrowDown" | "Down" => Ok(TreeKey::ArrowDown),
            "ArrowLeft" | "Left" => Ok(TreeKey::ArrowLeft),
            "ArrowRight" | "Right" => Ok(TreeKey::ArrowRight),
            "Home" => Ok(TreeKey::Home),
            "End" => Ok(TreeKey::End),
            "Enter" => Ok(TreeKey::Enter),
            "Space" | " " => Ok(TreeKey::Space),
            other => Err(TreeError::UnknownKey {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("ArrowDown".parse::<TreeKey>().unwrap(), TreeKey::ArrowDown);
        assert_eq!(" ".parse::<TreeKey>().unwrap(), TreeKey::Space);
        assert_eq!("Left".parse::<TreeKey>().unwrap(), TreeKey::ArrowLeft);
        assert!(matches!(
            "PageDown".parse::<TreeKey>(),
            Err(TreeError::UnknownKey { name }) if name == "PageDown"
        ));
    }

    #[test]
    fn test_name_roundtrip() {
        for key in [TreeKey::ArrowUp, TreeKey::Home, TreeKey::Space] {
            assert_eq!(key.to_string().parse::<TreeKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_from_key_event() {
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(TreeKey::from_key_event(&down), Some(TreeKey::ArrowDown));

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(TreeKey::from_key_event(&space), Some(TreeKey::Space));

        let ctrl_down = KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL);
        assert_eq!(TreeKey::from_key_event(&ctrl_down), None);

        let shift_down = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT);
        assert_eq!(TreeKey::from_key_event(&shift_down), Some(TreeKey::ArrowDown));

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(TreeKey::from_key_event(&tab), None);
    }
}
