pub mod app;
pub mod editor;
pub mod event;
pub mod mode;
pub mod render_state;

pub use app::App;
pub use editor::TextBuffer;
pub use event::{AppEvent, Command};
pub use mode::AppMode;
pub use render_state::RenderState;
