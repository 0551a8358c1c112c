//! Key bindings for the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(key: &KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// User actions, decoupled from the keys that trigger them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    MoveUp,
    MoveDown,
    MoveFirst,
    MoveLast,
    ToggleVisibility,
    Refresh,
    Help,
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        bindings.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        bindings.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        bindings.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        bindings.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        bindings.insert(KeyCombo::plain(KeyCode::Home), Command::MoveFirst);
        bindings.insert(KeyCombo::plain(KeyCode::Char('g')), Command::MoveFirst);
        bindings.insert(KeyCombo::plain(KeyCode::End), Command::MoveLast);
        bindings.insert(KeyCombo::plain(KeyCode::Char('G')), Command::MoveLast);

        bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleVisibility);
        bindings.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleVisibility);
        bindings.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Refresh);
        bindings.insert(KeyCombo::plain(KeyCode::Char('?')), Command::Help);

        Self { bindings }
    }

    /// Command bound to `key`, if any.
    ///
    /// Shift is ignored for character keys since terminals disagree on
    /// whether `G` or `?` arrive with the modifier set.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Command> {
        let combo = KeyCombo::from(key);
        if let Some(command) = self.bindings.get(&combo) {
            return Some(*command);
        }
        if matches!(key.code, KeyCode::Char(_)) && key.modifiers == KeyModifiers::SHIFT {
            return self.bindings.get(&KeyCombo::plain(key.code)).copied();
        }
        None
    }
}
