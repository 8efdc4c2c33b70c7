//! Keybinding configuration types and parsing
//!
//! Key combos are written in vim-style notation (e.g., "C-x", "S-c", "<Esc>")
//! both in the default bindings and in the `[keys]` section of the config.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::action::Action;
use crate::ui::events::InputMode;

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a KeyCombo from a crossterm KeyEvent
    ///
    /// Uppercase characters are normalized to lowercase + SHIFT so that
    /// "S-c" in config matches a Shift+c key event.
    pub fn from_key_event(event: &crossterm::event::KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            _ => Self {
                code: event.code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }

        let key_str = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::BackTab => "<BackTab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            _ => format!("{:?}", self.code),
        };

        if parts.is_empty() {
            write!(f, "{}", key_str)
        } else {
            parts.push(&key_str);
            write!(f, "{}", parts.join("-"))
        }
    }
}

/// Context for keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Keys that work in every context unless overridden
    Global,
    /// Browsing the tile grid
    Grid,
    /// Typing in the search box
    Search,
    /// Lightbox overlay is open
    Lightbox,
}

impl KeyContext {
    /// Resolve the active context. An open lightbox captures the keyboard.
    pub fn resolve(mode: InputMode, lightbox_open: bool) -> Self {
        if lightbox_open {
            return KeyContext::Lightbox;
        }
        match mode {
            InputMode::Browsing => KeyContext::Grid,
            InputMode::Searching => KeyContext::Search,
        }
    }
}

/// Configuration for all keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Global keybindings (apply to all contexts unless overridden)
    pub global: HashMap<KeyCombo, Action>,
    /// Context-specific keybindings
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an action for a key combo in a given context
    /// First checks context-specific bindings, then falls back to global
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<&Action> {
        if let Some(action) = self
            .context
            .get(&context)
            .and_then(|bindings| bindings.get(key))
        {
            return Some(action);
        }
        self.global.get(key)
    }

    /// First key bound to `action` in `context` (or globally), for key hints
    pub fn key_for(&self, action: &Action, context: KeyContext) -> Option<&KeyCombo> {
        self.context
            .get(&context)
            .and_then(|bindings| first_key_for(bindings, action))
            .or_else(|| first_key_for(&self.global, action))
    }

    /// Merge user configuration on top of defaults
    pub fn merge(&mut self, other: KeybindingConfig) {
        for (key, action) in other.global {
            self.global.insert(key, action);
        }

        for (ctx, bindings) in other.context {
            let entry = self.context.entry(ctx).or_default();
            for (key, action) in bindings {
                entry.insert(key, action);
            }
        }
    }
}

/// Shortest notation first so hints stay stable across runs
fn first_key_for<'a>(
    bindings: &'a HashMap<KeyCombo, Action>,
    action: &Action,
) -> Option<&'a KeyCombo> {
    bindings
        .iter()
        .filter(|(_, bound)| *bound == action)
        .map(|(key, _)| key)
        .min_by_key(|key| {
            let notation = key.to_string();
            (notation.len(), notation)
        })
}

/// Parse a vim-style key notation string into a KeyCombo
///
/// Modifiers are `C-` (Ctrl), `M-` (Alt) and `S-` (Shift), in any order.
/// Named keys go in angle brackets and may carry the modifiers inside or
/// outside: `<C-Left>` and `C-<Left>` are the same combo. An uppercase
/// letter implies Shift.
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if let Some(inner) = bracketed(s) {
        let (modifiers, name) = peel_modifiers(inner);
        let code = named_key(name).ok_or_else(|| match name.split_once('-') {
            Some((modifier, _)) => KeyParseError::InvalidModifier(modifier.to_string()),
            None => KeyParseError::InvalidSpecialKey(name.to_string()),
        })?;
        return Ok(KeyCombo::new(code, modifiers));
    }

    let (mut modifiers, key) = peel_modifiers(s);
    let mut chars = key.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => {
            if c.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c.to_ascii_lowercase())
        }
        _ => named_key(bracketed(key).unwrap_or(key))
            .ok_or_else(|| KeyParseError::InvalidKey(key.to_string()))?,
    };
    Ok(KeyCombo::new(code, modifiers))
}

fn bracketed(s: &str) -> Option<&str> {
    s.strip_prefix('<')?.strip_suffix('>')
}

/// Strip leading `C-`, `M-`, `S-` prefixes. A prefix needs a key after it,
/// so "C" alone and the '-' in "C--" are keys.
fn peel_modifiers(mut s: &str) -> (KeyModifiers, &str) {
    let mut modifiers = KeyModifiers::NONE;
    loop {
        let flag = match s.as_bytes() {
            [b'C', b'-', _, ..] => KeyModifiers::CONTROL,
            [b'M', b'-', _, ..] => KeyModifiers::ALT,
            [b'S', b'-', _, ..] => KeyModifiers::SHIFT,
            _ => return (modifiers, s),
        };
        modifiers |= flag;
        s = &s[2..];
    }
}

fn named_key(name: &str) -> Option<KeyCode> {
    let code = match name.to_ascii_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        _ => return None,
    };
    Some(code)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("unknown key name: <{0}>")]
    InvalidSpecialKey(String),
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}
