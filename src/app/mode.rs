/// Which pane owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Keys edit the source text
    Editing,
    /// Keys are playback shortcuts
    Reading,
    Quit,
}
