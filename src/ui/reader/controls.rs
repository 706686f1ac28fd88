use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::Command;
use crate::ui::theme::colors;

/// On-screen buttons, left to right.
pub const BUTTONS: [Command; 5] = [
    Command::DecreaseRate,
    Command::IncreaseRate,
    Command::NewSession,
    Command::TogglePlay,
    Command::Restart,
];

pub fn button_label(command: Command, playing: bool) -> &'static str {
    match command {
        Command::DecreaseRate => "-",
        Command::IncreaseRate => "+",
        Command::NewSession => "New (N)",
        Command::TogglePlay if playing => "Pause (P)",
        Command::TogglePlay => "Play (P)",
        Command::Restart => "Restart (R)",
    }
}

/// Cell width reserved for a button, wide enough for either label state.
pub fn button_width(command: Command) -> u16 {
    let widest = button_label(command, true)
        .chars()
        .count()
        .max(button_label(command, false).chars().count());
    // borders plus one cell of padding either side
    widest as u16 + 4
}

pub fn render_button(command: Command, playing: bool) -> Paragraph<'static> {
    let style = match command {
        Command::TogglePlay => Style::default()
            .fg(colors::accent())
            .add_modifier(Modifier::BOLD),
        Command::Restart => Style::default().fg(colors::confirm()),
        _ => Style::default().fg(colors::text()),
    };

    Paragraph::new(button_label(command, playing))
        .alignment(Alignment::Center)
        .style(style.bg(colors::surface()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::dimmed())),
        )
}

/// Which button, if any, covers the cell at (`column`, `row`).
pub fn button_at(buttons: &[(Command, Rect)], column: u16, row: u16) -> Option<Command> {
    buttons
        .iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(command, _)| *command)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
