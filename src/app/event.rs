/// Playback commands. Buttons and keyboard shortcuts both resolve to one of
/// these, so the two entry points cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    TogglePlay,
    Restart,
    NewSession,
    IncreaseRate,
    DecreaseRate,
}

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Command(Command),
    Insert(char),
    Backspace,
    Paste(String),
    LoadClipboard,
    FocusEditor,
    FocusReader,
    ToggleFocus,
    Warning(String),
    Quit,
}
