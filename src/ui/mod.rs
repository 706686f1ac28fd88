pub mod command;
pub mod editor;
pub mod layout;
pub mod reader;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{key_to_event, Keymap};
pub use layout::ScreenLayout;
pub use reader::view::{render_progress_bar, render_word_display};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
