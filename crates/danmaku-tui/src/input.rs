use crossterm::event::KeyEvent;

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Pause,
    Resume,
    TogglePlayback,
    /// Send one sample comment right away
    Send,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    keymap
        .get(&KeyBinding::from(key))
        .cloned()
        .unwrap_or(Action::None)
}
