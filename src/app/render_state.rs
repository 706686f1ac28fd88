use crate::app::mode::AppMode;
use crate::reading::{PlaybackState, Snapshot};

/// Render state for UI components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState<'a> {
    pub mode: AppMode,
    pub current_word: &'a str,
    /// 1-based position and total token count
    pub progress: (usize, usize),
    pub playback: PlaybackState,
    pub wpm: u32,
    pub text: &'a str,
    pub status: Option<&'a str>,
}

impl<'a> RenderState<'a> {
    pub fn new(
        mode: AppMode,
        snapshot: Snapshot<'a>,
        text: &'a str,
        status: Option<&'a str>,
    ) -> Self {
        Self {
            mode,
            current_word: snapshot.current_token,
            progress: (snapshot.position, snapshot.total),
            playback: snapshot.playback,
            wpm: snapshot.wpm,
            text,
            status,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    /// Counter line as shown under the token, e.g. `"3 / 3 words"`.
    pub fn progress_label(&self) -> String {
        format!("{} / {} words", self.progress.0, self.progress.1)
    }
}
