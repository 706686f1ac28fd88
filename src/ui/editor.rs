use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::colors;

const PLACEHOLDER: &str = "Paste your text here (English or Chinese)...";

/// Number of lines scrolled off the top so the end of `text` stays visible
/// in a pane with `inner_height` rows.
pub fn scroll_offset(text: &str, inner_height: u16) -> u16 {
    let lines = line_count(text);
    let visible = usize::from(inner_height.max(1));
    u16::try_from(lines.saturating_sub(visible)).unwrap_or(u16::MAX)
}

/// Terminal cell just after the last character of `text`, inside the
/// bordered pane at `area`.
pub fn cursor_position(text: &str, area: Rect) -> Position {
    let inner = inner(area);
    let last_line = text.rsplit('\n').next().unwrap_or("");
    let column = u16::try_from(last_line.width()).unwrap_or(u16::MAX);
    let max_column = inner.width.saturating_sub(1);
    let row = u16::try_from(line_count(text) - 1)
        .unwrap_or(u16::MAX)
        .saturating_sub(scroll_offset(text, inner.height));

    Position::new(
        inner.x.saturating_add(column.min(max_column)),
        inner.y.saturating_add(row.min(inner.height.saturating_sub(1))),
    )
}

pub fn render_editor(text: &str, area: Rect, focused: bool) -> Paragraph<'static> {
    let border = if focused {
        colors::accent()
    } else {
        colors::dimmed()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Text ")
        .border_style(Style::default().fg(border));

    if text.is_empty() {
        return Paragraph::new(PLACEHOLDER)
            .style(Style::default().fg(colors::dimmed()).bg(colors::surface()))
            .block(block);
    }

    Paragraph::new(text.to_string())
        .scroll((scroll_offset(text, inner(area).height), 0))
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
        .block(block)
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}
