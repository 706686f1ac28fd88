use glimpse::app::{App, AppEvent, AppMode, Command};
use glimpse::config::PlaybackConfig;
use glimpse::input::file::load_text_file;
use glimpse::reading::{tick_interval, tokenize, ManualClock, PlaybackState};
use glimpse::ui::{key_to_event, Keymap, ScreenLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::fs::{self, File};
use std::io::Write;

#[test]
fn end_to_end_reading() {
    let test_file = std::env::temp_dir().join(format!("glimpse_e2e_{}.txt", std::process::id()));
    let content = "Hello world! 这是 a test of the RSVP reader.";

    let mut file = File::create(&test_file).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let loaded_content = load_text_file(&test_file).expect("Should load file successfully");
    assert_eq!(loaded_content, content);

    let tokens = tokenize(&loaded_content);
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[0], "Hello");
    assert_eq!(tokens[2], "这");

    let mut app = App::with_clock(PlaybackConfig::default(), ManualClock::new());
    app.load_document(&loaded_content);
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.render_state().current_word, "Hello");

    app.handle_event(AppEvent::Command(Command::TogglePlay));
    app.controller().clock().advance(tick_interval(350));
    app.poll_timer();
    assert_eq!(app.render_state().current_word, "world");

    app.handle_event(AppEvent::Command(Command::IncreaseRate));
    assert_eq!(app.render_state().wpm, 400);

    fs::remove_file(test_file).unwrap();
}

#[test]
fn shortcut_and_button_paths_agree() {
    let keymap = Keymap::default();
    let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30));

    let mut by_key = App::with_clock(PlaybackConfig::default(), ManualClock::new());
    let mut by_click = App::with_clock(PlaybackConfig::default(), ManualClock::new());
    by_key.load_document("one two three four");
    by_click.load_document("one two three four");

    let sequence = [
        ('+', Command::IncreaseRate),
        ('p', Command::TogglePlay),
        ('-', Command::DecreaseRate),
        ('r', Command::Restart),
        ('P', Command::TogglePlay),
        ('n', Command::NewSession),
    ];

    for (key, command) in sequence {
        let event = key_to_event(
            KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE),
            by_key.mode(),
            &keymap,
        )
        .expect("shortcut should map to an event");
        by_key.handle_event(event);

        let (_, rect) = layout
            .buttons
            .iter()
            .find(|(c, _)| *c == command)
            .copied()
            .unwrap();
        let clicked = layout.button_at(rect.x, rect.y).unwrap();
        by_click.handle_event(AppEvent::Command(clicked));

        assert_eq!(by_key.render_state(), by_click.render_state());
        assert_eq!(
            by_key.controller().is_timer_armed(),
            by_click.controller().is_timer_armed()
        );
    }

    assert_eq!(by_key.editor_text(), "");
    assert_eq!(
        by_key.controller().state().playback(),
        PlaybackState::Paused
    );
}
