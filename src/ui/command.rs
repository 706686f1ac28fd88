//! Keyboard translation for the TUI
//!
//! Turns crossterm key events into [`AppEvent`]s. What a key means depends on
//! which pane has focus:
//!
//! - everywhere: `Ctrl-C` quits, `Ctrl-V` pastes the clipboard, `Tab` swaps
//!   focus
//! - editor: printable keys edit the text, `Esc` hands focus to the reader
//! - reader: the [`Keymap`] shortcuts (`p`, `r`, `n`, `+`, `-`), plus
//!   `i`/`e`/`Esc` to go back to the editor and `q` to quit

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppEvent, AppMode, Command};

/// Playback shortcut table. Lookups ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<char, Command>,
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: char, command: Command) {
        self.bindings.insert(key.to_ascii_lowercase(), command);
    }

    pub fn resolve(&self, key: char) -> Option<Command> {
        self.bindings.get(&key.to_ascii_lowercase()).copied()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind('p', Command::TogglePlay);
        keymap.bind('r', Command::Restart);
        keymap.bind('n', Command::NewSession);
        keymap.bind('+', Command::IncreaseRate);
        // unshifted '+' on most layouts
        keymap.bind('=', Command::IncreaseRate);
        keymap.bind('-', Command::DecreaseRate);
        keymap
    }
}

pub fn key_to_event(key: KeyEvent, mode: AppMode, keymap: &Keymap) -> Option<AppEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => return Some(AppEvent::Quit),
        KeyCode::Char('v') | KeyCode::Char('V') if ctrl => return Some(AppEvent::LoadClipboard),
        KeyCode::Tab => return Some(AppEvent::ToggleFocus),
        _ => {}
    }

    match mode {
        AppMode::Editing => match key.code {
            KeyCode::Esc => Some(AppEvent::FocusReader),
            KeyCode::Enter => Some(AppEvent::Insert('\n')),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Char(c) if !ctrl && !alt => Some(AppEvent::Insert(c)),
            _ => None,
        },
        AppMode::Reading => match key.code {
            KeyCode::Esc => Some(AppEvent::FocusEditor),
            KeyCode::Char(c) if !ctrl && !alt => match c.to_ascii_lowercase() {
                'q' => Some(AppEvent::Quit),
                'i' | 'e' => Some(AppEvent::FocusEditor),
                _ => keymap.resolve(c).map(AppEvent::Command),
            },
            _ => None,
        },
        AppMode::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn reading(key: KeyEvent) -> Option<AppEvent> {
        key_to_event(key, AppMode::Reading, &Keymap::default())
    }

    fn editing(key: KeyEvent) -> Option<AppEvent> {
        key_to_event(key, AppMode::Editing, &Keymap::default())
    }

    #[test]
    fn test_default_shortcuts() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve('p'), Some(Command::TogglePlay));
        assert_eq!(keymap.resolve('r'), Some(Command::Restart));
        assert_eq!(keymap.resolve('n'), Some(Command::NewSession));
        assert_eq!(keymap.resolve('+'), Some(Command::IncreaseRate));
        assert_eq!(keymap.resolve('-'), Some(Command::DecreaseRate));
        assert_eq!(keymap.resolve('x'), None);
    }

    #[test]
    fn test_shortcuts_ignore_case() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve('P'), Some(Command::TogglePlay));
        assert_eq!(keymap.resolve('R'), Some(Command::Restart));
        assert_eq!(keymap.resolve('N'), Some(Command::NewSession));
    }

    #[test]
    fn test_reading_mode_maps_shortcuts_to_commands() {
        assert_eq!(
            reading(press('p')),
            Some(AppEvent::Command(Command::TogglePlay))
        );
        assert_eq!(
            reading(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Some(AppEvent::Command(Command::IncreaseRate))
        );
        assert_eq!(
            reading(KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT)),
            Some(AppEvent::Command(Command::TogglePlay))
        );
        assert_eq!(reading(press('z')), None);
    }

    #[test]
    fn test_reading_mode_navigation_keys() {
        assert_eq!(reading(press('q')), Some(AppEvent::Quit));
        assert_eq!(reading(press('Q')), Some(AppEvent::Quit));
        assert_eq!(
            reading(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppEvent::Quit)
        );
        assert_eq!(reading(press('i')), Some(AppEvent::FocusEditor));
        assert_eq!(reading(press('e')), Some(AppEvent::FocusEditor));
    }

    #[test]
    fn test_esc_swaps_focus_in_both_modes_without_quitting() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(reading(esc), Some(AppEvent::FocusEditor));
        assert_eq!(editing(esc), Some(AppEvent::FocusReader));
    }

    #[test]
    fn test_editing_mode_inserts_shortcut_letters() {
        assert_eq!(editing(press('p')), Some(AppEvent::Insert('p')));
        assert_eq!(editing(press('+')), Some(AppEvent::Insert('+')));
        assert_eq!(
            editing(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(AppEvent::Insert('\n'))
        );
        assert_eq!(
            editing(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(AppEvent::Backspace)
        );
        assert_eq!(
            editing(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(AppEvent::FocusReader)
        );
    }

    #[test]
    fn test_global_keys_in_both_modes() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_v = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        for mode in [AppMode::Editing, AppMode::Reading] {
            let keymap = Keymap::default();
            assert_eq!(key_to_event(ctrl_c, mode, &keymap), Some(AppEvent::Quit));
            assert_eq!(
                key_to_event(ctrl_v, mode, &keymap),
                Some(AppEvent::LoadClipboard)
            );
            assert_eq!(key_to_event(tab, mode, &keymap), Some(AppEvent::ToggleFocus));
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = press('p');
        key.kind = KeyEventKind::Release;
        assert_eq!(reading(key), None);
    }

    #[test]
    fn test_custom_binding() {
        let mut keymap = Keymap::empty();
        keymap.bind('S', Command::TogglePlay);
        assert_eq!(
            key_to_event(press('s'), AppMode::Reading, &keymap),
            Some(AppEvent::Command(Command::TogglePlay))
        );
        assert_eq!(key_to_event(press('p'), AppMode::Reading, &keymap), None);
    }
}
