//! Keyboard and pointer bindings.
//!
//! Hosts translate their native events into `KeyEvent`/`PointerEvent` and
//! get back the `Command` to queue, if any. The finish, cancel and undo keys
//! are configurable; pointer handling is fixed: left click places a point,
//! right click or Ctrl+click finishes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::geometry::{Extent, Point};

/// A key, independent of any windowing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Delete,
    Space,
    /// A printable key, stored lowercase
    Char(char),
}

impl Key {
    /// Parse a key name as reported by browsers (`KeyboardEvent.key`).
    pub fn parse(name: &str) -> Option<Key> {
        match name {
            "Enter" => Some(Key::Enter),
            "Escape" | "Esc" => Some(Key::Escape),
            "Backspace" => Some(Key::Backspace),
            "Delete" => Some(Key::Delete),
            " " | "Space" => Some(Key::Space),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c.to_ascii_lowercase())),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Enter => write!(f, "Enter"),
            Key::Escape => write!(f, "Esc"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Space => write!(f, "Space"),
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
        }
    }
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS; treated like Ctrl
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        meta: false,
        shift: false,
    };

    /// Ctrl or Cmd held.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key plus whether Ctrl/Cmd must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: Key,
    #[serde(default)]
    pub ctrl: bool,
}

impl KeyBinding {
    pub const fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub const fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }

    /// Plain bindings fire regardless of modifiers; Ctrl bindings need Ctrl or Cmd.
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        self.key == key && (!self.ctrl || modifiers.command())
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+{}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// Discrete actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Finish,
    Cancel,
    Undo,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Finish, Action::Cancel, Action::Undo];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Finish => "close/finish",
            Action::Cancel => "cancel",
            Action::Undo => "undo",
        }
    }

    pub fn command(&self) -> Command {
        match self {
            Action::Finish => Command::Finish,
            Action::Cancel => Command::Cancel,
            Action::Undo => Command::Undo,
        }
    }
}

/// Keybinding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub finish: KeyBinding,
    pub cancel: KeyBinding,
    pub undo: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            finish: KeyBinding::plain(Key::Enter),
            cancel: KeyBinding::plain(Key::Escape),
            undo: KeyBinding::ctrl(Key::Char('z')),
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binding_for(&self, action: Action) -> KeyBinding {
        match action {
            Action::Finish => self.finish,
            Action::Cancel => self.cancel,
            Action::Undo => self.undo,
        }
    }

    pub fn set_binding(&mut self, action: Action, binding: KeyBinding) {
        match action {
            Action::Finish => self.finish = binding,
            Action::Cancel => self.cancel = binding,
            Action::Undo => self.undo = binding,
        }
    }

    /// Action for a key press, if any.
    ///
    /// Ctrl bindings are checked first so Ctrl+key is not swallowed by a
    /// plain binding on the same key.
    pub fn action_for(&self, key: Key, modifiers: Modifiers) -> Option<Action> {
        let (ctrl, plain): (Vec<Action>, Vec<Action>) = Action::ALL
            .into_iter()
            .partition(|a| self.binding_for(*a).ctrl);
        ctrl.into_iter()
            .chain(plain)
            .find(|a| self.binding_for(*a).matches(key, modifiers))
    }

    /// Name of the action already bound to `binding`, ignoring `exclude`.
    pub fn conflict(&self, binding: KeyBinding, exclude: Option<Action>) -> Option<&'static str> {
        Action::ALL
            .into_iter()
            .filter(|a| Some(*a) != exclude)
            .find(|a| self.binding_for(*a) == binding)
            .map(|a| a.name())
    }

    /// Short help line, e.g. `Enter = close/finish · Esc = cancel · Ctrl+Z = undo`.
    pub fn hint(&self) -> String {
        Action::ALL
            .iter()
            .map(|a| format!("{} = {}", self.binding_for(*a), a.name()))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// A key press from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Focus is in a text field; the press belongs to it
    pub in_text_field: bool,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            in_text_field: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// A click on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub button: PointerButton,
    /// Display-space position
    pub position: Point,
    pub surface: Extent,
    pub modifiers: Modifiers,
}

/// Command for a key press, if it is bound.
pub fn command_for_key(bindings: &KeyBindings, event: &KeyEvent) -> Option<Command> {
    if event.in_text_field {
        return None;
    }
    bindings
        .action_for(event.key, event.modifiers)
        .map(|a| a.command())
}

/// Command for a click on the surface.
pub fn command_for_pointer(event: &PointerEvent) -> Option<Command> {
    match event.button {
        PointerButton::Right => Some(Command::Finish),
        PointerButton::Left if event.modifiers.ctrl => Some(Command::Finish),
        PointerButton::Left => Some(Command::add_point(event.position, event.surface)),
        PointerButton::Middle => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, modifiers: Modifiers) -> Option<Command> {
        command_for_key(&KeyBindings::default(), &KeyEvent::new(key, modifiers))
    }

    fn click(button: PointerButton, modifiers: Modifiers) -> Option<Command> {
        command_for_pointer(&PointerEvent {
            button,
            position: Point::new(3.0, 4.0),
            surface: Extent::new(100.0, 50.0),
            modifiers,
        })
    }

    #[test]
    fn test_default_keys() {
        assert_eq!(press(Key::Enter, Modifiers::NONE), Some(Command::Finish));
        assert_eq!(press(Key::Escape, Modifiers::NONE), Some(Command::Cancel));
        assert_eq!(press(Key::Char('z'), Modifiers::CTRL), Some(Command::Undo));
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(press(Key::Char('z'), cmd), Some(Command::Undo));
        assert_eq!(press(Key::Char('z'), Modifiers::NONE), None);
    }

    #[test]
    fn test_text_field_swallows_keys() {
        let event = KeyEvent {
            key: Key::Enter,
            modifiers: Modifiers::NONE,
            in_text_field: true,
        };
        assert_eq!(command_for_key(&KeyBindings::default(), &event), None);
    }

    #[test]
    fn test_pointer_mapping() {
        assert_eq!(
            click(PointerButton::Left, Modifiers::NONE),
            Some(Command::AddPoint {
                x: 3.0,
                y: 4.0,
                surface_width: 100.0,
                surface_height: 50.0,
            })
        );
        assert_eq!(click(PointerButton::Right, Modifiers::NONE), Some(Command::Finish));
        assert_eq!(click(PointerButton::Left, Modifiers::CTRL), Some(Command::Finish));
        assert_eq!(click(PointerButton::Middle, Modifiers::NONE), None);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(Key::parse("Enter"), Some(Key::Enter));
        assert_eq!(Key::parse("Escape"), Some(Key::Escape));
        assert_eq!(Key::parse("Z"), Some(Key::Char('z')));
        assert_eq!(Key::parse("ArrowLeft"), None);
    }

    #[test]
    fn test_hint() {
        assert_eq!(
            KeyBindings::default().hint(),
            "Enter = close/finish · Esc = cancel · Ctrl+Z = undo"
        );
    }

    #[test]
    fn test_rebinding_and_conflicts() {
        let mut bindings = KeyBindings::default();
        assert_eq!(
            bindings.conflict(KeyBinding::plain(Key::Enter), Some(Action::Cancel)),
            Some("close/finish")
        );
        assert_eq!(
            bindings.conflict(KeyBinding::plain(Key::Enter), Some(Action::Finish)),
            None
        );

        bindings.set_binding(Action::Finish, KeyBinding::plain(Key::Space));
        assert_eq!(
            bindings.action_for(Key::Space, Modifiers::NONE),
            Some(Action::Finish)
        );
        assert_eq!(bindings.action_for(Key::Enter, Modifiers::NONE), None);
    }

    #[test]
    fn test_ctrl_binding_wins_over_plain() {
        let mut bindings = KeyBindings::default();
        bindings.set_binding(Action::Cancel, KeyBinding::plain(Key::Char('z')));
        assert_eq!(
            bindings.action_for(Key::Char('z'), Modifiers::CTRL),
            Some(Action::Undo)
        );
        assert_eq!(
            bindings.action_for(Key::Char('z'), Modifiers::NONE),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_bindings_serde() {
        let json = serde_json::to_string(&KeyBindings::default()).unwrap();
        let back: KeyBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, KeyBindings::default());
    }
}
