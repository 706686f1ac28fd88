use crate::app::{App, AppEvent, AppMode, RenderState};
use crate::config::UiConfig;
use crate::reading::Clock;
use crate::ui::command::{key_to_event, Keymap};
use crate::ui::editor::{cursor_position, render_editor};
use crate::ui::layout::ScreenLayout;
use crate::ui::reader::controls::render_button;
use crate::ui::reader::view::{
    render_counter, render_progress_bar, render_rate, render_status, render_word_display,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keymap: Keymap,
    config: UiConfig,
    layout: Option<ScreenLayout>,
    // dropped last so the terminal is restored after ratatui lets go of it
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(config: UiConfig) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            keymap: Keymap::default(),
            config,
            layout: None,
            _guard: guard,
        })
    }

    /// Runs until the app asks to quit. Each iteration handles at most one
    /// input event, then lets the playback timer fire if it is due, then
    /// redraws.
    pub fn run_event_loop<C: Clock>(&mut self, app: &mut App<C>) -> io::Result<()> {
        info!("event loop started");

        loop {
            self.render_frame(app)?;
            if app.mode() == AppMode::Quit {
                info!("event loop finished");
                return Ok(());
            }

            if event::poll(self.poll_timeout(app))? {
                let event = event::read()?;
                if let Some(app_event) = self.translate(event, app.mode()) {
                    app.handle_event(app_event);
                }
            }

            app.poll_timer();
        }
    }

    pub fn render_frame<C: Clock>(&mut self, app: &App<C>) -> io::Result<()> {
        let render_state = app.render_state();
        let progress_width = self.config.progress_bar_width;
        let mut drawn_layout = None;

        self.terminal.draw(|frame| {
            drawn_layout = Some(draw(frame, &render_state, progress_width));
        })?;

        self.layout = drawn_layout;
        Ok(())
    }

    /// Sleep until the timer is due, or for the idle interval when it is not
    /// armed.
    fn poll_timeout<C: Clock>(&self, app: &App<C>) -> Duration {
        match app.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => self.config.idle_poll,
        }
    }

    fn translate(&self, event: Event, mode: AppMode) -> Option<AppEvent> {
        match event {
            Event::Key(key) => key_to_event(key, mode, &self.keymap),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let command = self
                        .layout
                        .as_ref()
                        .and_then(|layout| layout.button_at(mouse.column, mouse.row))?;
                    debug!(?command, "button clicked");
                    Some(AppEvent::Command(command))
                }
                _ => None,
            },
            Event::Paste(text) => Some(AppEvent::Paste(text)),
            _ => None,
        }
    }
}

fn draw(frame: &mut Frame, state: &RenderState<'_>, progress_width: usize) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());
    let editing = state.mode == AppMode::Editing;

    frame.render_widget(render_editor(state.text, layout.editor, editing), layout.editor);
    if editing {
        frame.set_cursor_position(cursor_position(state.text, layout.editor));
    }

    let has_tokens = state.progress.1 > 0;
    frame.render_widget(render_word_display(state.current_word, has_tokens), layout.word);

    frame.render_widget(render_rate(state.wpm), layout.rate);
    for (command, rect) in &layout.buttons {
        frame.render_widget(render_button(*command, state.is_playing()), *rect);
    }

    frame.render_widget(render_counter(state), layout.counter);
    frame.render_widget(
        render_progress_bar(state.progress, progress_width),
        layout.progress,
    );
    frame.render_widget(render_status(state), layout.status);

    layout
}
