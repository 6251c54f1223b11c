use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use danmaku_core::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(key: KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        let mut add_binding = |key_str: &str, action: Action| {
            let Some(binding) = parse_key_binding(key_str) else {
                warn!("Invalid key binding: '{}', ignoring {:?}", key_str, action);
                return;
            };
            if let Some(existing) = bindings.get(&binding) {
                warn!(
                    "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                    key_str, existing, action
                );
            } else {
                bindings.insert(binding, action);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.pause, Action::Pause);
        add_binding(&config.resume, Action::Resume);
        add_binding(&config.toggle, Action::TogglePlayback);
        add_binding(&config.send, Action::Send);

        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings
            .entry(KeyBinding::simple(KeyCode::Esc))
            .or_insert(Action::Quit);

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "p", "r", "q", etc.
/// - Uppercase (Shift): "P", "R", etc.
/// - Ctrl: "<C-p>"
/// - Shift: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<F1>"...
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        Some(KeyBinding::shift(KeyCode::Char(c)))
    } else {
        Some(KeyBinding::simple(KeyCode::Char(c)))
    }
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }
    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(KeyBinding::shift);
    }
    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            // Single character after modifier (e.g., "p" in "<C-p>")
            let mut chars = name.chars();
            let c = chars.next()?;
            chars.next().is_none().then(|| KeyCode::Char(c.to_ascii_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("p"),
            Some(KeyBinding::simple(KeyCode::Char('p')))
        );
        assert_eq!(
            parse_key_binding("R"),
            Some(KeyBinding::shift(KeyCode::Char('R')))
        );
        assert_eq!(parse_key_binding("pp"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<Space>"),
            Some(KeyBinding::simple(KeyCode::Char(' ')))
        );
        assert_eq!(
            parse_key_binding("<CR>"),
            Some(KeyBinding::simple(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_binding("<C-p>"),
            Some(KeyBinding::ctrl(KeyCode::Char('p')))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<F5>"),
            Some(KeyBinding::simple(KeyCode::F(5)))
        );
        assert_eq!(parse_key_binding("<F13>"), None);
        assert_eq!(parse_key_binding("<Nope>"), None);
    }

    #[test]
    fn test_keymap_from_default_config() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('p'))),
            Some(&Action::Pause)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char(' '))),
            Some(&Action::TogglePlayback)
        );
        assert_eq!(
            keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Esc)),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            send: "p".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('p'))),
            Some(&Action::Pause)
        );
        assert!(keymap
            .get(&KeyBinding::simple(KeyCode::Char('s')))
            .is_none());
    }
}
