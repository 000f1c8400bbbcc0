// SPDX-License-Identifier: MPL-2.0
//! Keyboard input for the viewer, with held-key repeat suppression.

use std::collections::HashSet;

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Maps a key name as reported by the host (`"ArrowLeft"`, `"Escape"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// A key-down signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Set by hosts that flag auto-repeated key-downs.
    pub repeat: bool,
}

impl KeyPress {
    #[must_use]
    pub fn initial(key: Key) -> Self {
        Self { key, repeat: false }
    }

    #[must_use]
    pub fn repeated(key: Key) -> Self {
        Self { key, repeat: true }
    }
}

/// How a host tells an auto-repeated key-down from a fresh press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatDetection {
    /// The host sets [`KeyPress::repeat`]; key-ups are optional.
    #[default]
    Flagged,
    /// The host never flags repeats but reports every key-up. A key stays
    /// held from its first key-down until its key-up.
    HeldUntilRelease,
}

/// Lets only the initial press of a held key through.
#[derive(Debug, Clone, Default)]
pub struct RepeatFilter {
    detection: RepeatDetection,
    held: HashSet<Key>,
}

impl RepeatFilter {
    #[must_use]
    pub fn new(detection: RepeatDetection) -> Self {
        Self {
            detection,
            held: HashSet::new(),
        }
    }

    /// Returns the key if this key-down is an initial press.
    pub fn key_down(&mut self, press: KeyPress) -> Option<Key> {
        if press.repeat {
            return None;
        }
        match self.detection {
            RepeatDetection::Flagged => Some(press.key),
            RepeatDetection::HeldUntilRelease => self.held.insert(press.key).then_some(press.key),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Forgets every held key, e.g. when the viewer loses focus.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
