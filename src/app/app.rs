use std::time::Instant;

use tracing::{debug, warn};

use super::editor::TextBuffer;
use super::event::{AppEvent, Command};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::config::PlaybackConfig;
use crate::input::clipboard;
use crate::reading::{Clock, PlaybackController, SystemClock, TickOutcome};

pub struct App<C: Clock = SystemClock> {
    mode: AppMode,
    editor: TextBuffer,
    controller: PlaybackController<C>,
    rate_step: i32,
    status: Option<String>,
}

impl App<SystemClock> {
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: PlaybackConfig, clock: C) -> Self {
        let rate_step = config.step_delta();
        Self {
            mode: AppMode::Editing,
            editor: TextBuffer::new(),
            controller: PlaybackController::with_clock(config, clock),
            rate_step,
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn controller(&self) -> &PlaybackController<C> {
        &self.controller
    }

    pub fn editor_text(&self) -> &str {
        self.editor.as_str()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Replaces the editor contents with `text` and hands focus to the reader
    /// when there is something to read.
    pub fn load_document(&mut self, text: &str) {
        self.editor.set(text);
        self.reload();
        if !self.controller.state().tokens().is_empty() {
            self.mode = AppMode::Reading;
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Command(command) => self.dispatch(command),
            AppEvent::Insert(c) => {
                self.editor.insert(c);
                self.reload();
            }
            AppEvent::Backspace => {
                if self.editor.backspace() {
                    self.reload();
                }
            }
            AppEvent::Paste(text) => {
                self.editor.insert_str(&text);
                self.reload();
            }
            AppEvent::LoadClipboard => match clipboard::load() {
                Ok(text) => self.handle_event(AppEvent::Paste(text)),
                Err(e) => self.handle_event(AppEvent::Warning(e.to_string())),
            },
            AppEvent::FocusEditor => self.mode = AppMode::Editing,
            AppEvent::FocusReader => self.mode = AppMode::Reading,
            AppEvent::ToggleFocus => {
                self.mode = match self.mode {
                    AppMode::Editing => AppMode::Reading,
                    AppMode::Reading => AppMode::Editing,
                    AppMode::Quit => AppMode::Quit,
                }
            }
            AppEvent::Warning(message) => {
                warn!(%message, "input warning");
                self.status = Some(message);
            }
            AppEvent::Quit => {
                debug!("quit requested");
                self.mode = AppMode::Quit;
            }
        }
    }

    /// Runs a playback command. Shared by buttons and keyboard shortcuts.
    pub fn dispatch(&mut self, command: Command) {
        self.status = None;
        match command {
            Command::TogglePlay => self.controller.toggle_play(),
            Command::Restart => self.controller.restart(),
            Command::NewSession => {
                self.editor.clear();
                self.controller.new_session();
            }
            Command::IncreaseRate => self.controller.adjust_rate(self.rate_step),
            Command::DecreaseRate => self.controller.adjust_rate(-self.rate_step),
        }
    }

    pub fn poll_timer(&mut self) -> TickOutcome {
        self.controller.poll_timer()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    pub fn render_state(&self) -> RenderState<'_> {
        RenderState::new(self.mode, self.controller.snapshot(), self.editor_text(), self.status())
    }

    fn reload(&mut self) {
        self.controller.load_text(self.editor.as_str());
    }
}
