use crate::app::{AppMode, RenderState};
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

/// The token being read, centred in a bordered pane.
pub fn render_word_display(word: &str, has_tokens: bool) -> Paragraph<'static> {
    let style = if has_tokens {
        Style::default()
            .fg(colors::word())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::dimmed())
    };

    // blank first line puts the word on the middle row of the pane
    let text = Text::from(vec![Line::default(), Line::from(Span::styled(word.to_string(), style))]);

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::surface()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::dimmed())),
        )
}

pub fn render_rate(wpm: u32) -> Paragraph<'static> {
    Paragraph::new(format!("{wpm} WPM"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::text()).bg(colors::background()))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM))
}

pub fn render_counter(state: &RenderState<'_>) -> Line<'static> {
    Line::from(Span::styled(
        state.progress_label(),
        Style::default().fg(colors::dimmed()),
    ))
    .alignment(Alignment::Center)
}

/// 1-based `progress` drawn as a bar of `width` cells.
pub fn render_progress_bar(progress: (usize, usize), width: usize) -> Line<'static> {
    let (position, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (position.min(total) * width) / total
    };
    let empty_len = width - filled_len;

    let spans = vec![
        Span::styled("━".repeat(filled_len), Style::default().fg(colors::accent())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ];

    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_status(state: &RenderState<'_>) -> Line<'static> {
    if let Some(message) = state.status {
        return Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors::warning()),
        ));
    }

    let hint = match state.mode {
        AppMode::Editing => " EDITING  Esc/Tab: reader  Ctrl-V: paste  Ctrl-C: quit",
        AppMode::Reading => {
            " READING  P: play/pause  R: restart  N: new  +/-: speed  I/Esc: edit  Q: quit"
        }
        AppMode::Quit => " QUIT",
    };
    Line::from(Span::styled(hint, Style::default().fg(colors::dimmed())))
}
