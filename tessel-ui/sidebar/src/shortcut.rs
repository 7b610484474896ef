use iced::event::Status;
use iced::keyboard::{self, Key};

use crate::listeners::{ListenerGuard, ListenerKind, ListenerRegistry};

/// Letter that toggles the sidebar together with the platform modifier.
pub const DEFAULT_SHORTCUT_KEY: char = 'b';

/// Character key press with the modifiers relevant to shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyPress {
    /// Plain key press without modifiers.
    pub fn character(key: char) -> Self {
        Self {
            key,
            meta: false,
            ctrl: false,
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Extract a single-character key press from a keyboard event.
    pub fn from_event(event: &keyboard::Event) -> Option<Self> {
        let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
            return None;
        };
        let Key::Character(chars) = key else {
            return None;
        };

        let mut chars = chars.as_str().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Some(Self {
                key,
                meta: modifiers.logo(),
                ctrl: modifiers.control(),
            }),
            _ => None,
        }
    }
}

/// Global key listener that recognises the sidebar toggle shortcut.
#[derive(Debug)]
pub struct KeyboardShortcutBinder {
    key: char,
    listener: Option<ListenerGuard>,
}

impl KeyboardShortcutBinder {
    pub fn new(key: char) -> Self {
        Self {
            key,
            listener: None,
        }
    }

    /// Register the global listener. Binding twice keeps a single listener.
    pub fn bind(&mut self, registry: &ListenerRegistry) {
        if self.listener.is_none() {
            self.listener = Some(registry.register(ListenerKind::Keyboard));
        }
    }

    pub fn unbind(&mut self) {
        self.listener = None;
    }

    pub fn is_bound(&self) -> bool {
        self.listener.is_some()
    }

    pub fn key(&self) -> char {
        self.key
    }

    /// Return whether `press` is the shortcut chord.
    pub fn matches(&self, press: &KeyPress) -> bool {
        press.key == self.key && (press.meta || press.ctrl)
    }

    /// Classify a key press; captured presses must toggle and suppress the
    /// default action.
    pub fn handle(&self, press: &KeyPress) -> Status {
        if self.is_bound() && self.matches(press) {
            Status::Captured
        } else {
            Status::Ignored
        }
    }
}

impl Default for KeyboardShortcutBinder {
    fn default() -> Self {
        Self::new(DEFAULT_SHORTCUT_KEY)
    }
}
