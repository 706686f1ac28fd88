use crate::config::PlaybackConfig;
use crate::reading::{tokenize, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// Result of applying one tick to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or nothing to read; the session did not change
    Idle,
    /// Position moved to the next token
    Advanced,
    /// Already on the last token; playback stopped there
    Finished,
}

/// Session state: the raw text, its tokens, where the reader is and how fast
/// they are going. Knows nothing about time.
pub struct ReadingState {
    text: String,
    tokens: Vec<Token>,
    current_index: usize,
    playback: PlaybackState,
    wpm: u32,
    config: PlaybackConfig,
}

impl ReadingState {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            text: String::new(),
            tokens: Vec::new(),
            current_index: 0,
            playback: PlaybackState::Paused,
            wpm: config.clamp_wpm(i64::from(config.initial_wpm)),
            config,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current_index)
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Replaces the session with a fresh tokenization of `raw`, paused at the
    /// first token.
    pub fn load(&mut self, raw: &str) {
        self.text = raw.to_string();
        self.tokens = tokenize(raw);
        self.current_index = 0;
        self.playback = PlaybackState::Paused;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.tokens.clear();
        self.current_index = 0;
        self.playback = PlaybackState::Paused;
    }

    pub fn toggle(&mut self) {
        self.playback = match self.playback {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
        };
    }

    pub fn rewind_and_play(&mut self) {
        self.current_index = 0;
        self.playback = PlaybackState::Playing;
    }

    pub fn adjust_wpm(&mut self, delta: i32) {
        let new_wpm = i64::from(self.wpm) + i64::from(delta);
        self.wpm = self.config.clamp_wpm(new_wpm);
    }

    /// Moves one token forward while playing. On the last token playback
    /// pauses in place; it never wraps.
    pub fn step(&mut self) -> TickOutcome {
        if !self.is_playing() || self.tokens.is_empty() {
            return TickOutcome::Idle;
        }

        if self.current_index + 1 >= self.tokens.len() {
            self.playback = PlaybackState::Paused;
            return TickOutcome::Finished;
        }

        self.current_index += 1;
        TickOutcome::Advanced
    }
}
