use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Command;
use crate::ui::reader::controls::{button_at, button_width, BUTTONS};

/// Screen regions for one frame. Rendering and mouse hit-testing both read
/// from the same layout so a click always lands on what was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub editor: Rect,
    pub word: Rect,
    pub rate: Rect,
    pub buttons: Vec<(Command, Rect)>,
    pub counter: Rect,
    pub progress: Rect,
    pub status: Rect,
}

const RATE_WIDTH: u16 = 12;

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        // "-" [rate] "+" ... New Play Restart
        let mut constraints = vec![
            Constraint::Length(button_width(BUTTONS[0])),
            Constraint::Length(RATE_WIDTH),
            Constraint::Length(button_width(BUTTONS[1])),
            Constraint::Fill(1),
        ];
        constraints.extend(BUTTONS[2..].iter().map(|c| Constraint::Length(button_width(*c))));

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[2]);

        let mut buttons = vec![(BUTTONS[0], controls[0]), (BUTTONS[1], controls[2])];
        buttons.extend(
            BUTTONS[2..]
                .iter()
                .zip(controls[4..].iter())
                .map(|(command, rect)| (*command, *rect)),
        );

        Self {
            editor: rows[0],
            word: rows[1],
            rate: controls[1],
            buttons,
            counter: rows[3],
            progress: rows[4],
            status: rows[5],
        }
    }

    pub fn button_at(&self, column: u16, row: u16) -> Option<Command> {
        button_at(&self.buttons, column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_places_every_button() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30));
        let commands: Vec<Command> = layout.buttons.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            commands,
            vec![
                Command::DecreaseRate,
                Command::IncreaseRate,
                Command::NewSession,
                Command::TogglePlay,
                Command::Restart,
            ]
        );
        for (_, rect) in &layout.buttons {
            assert_eq!(rect.height, 3);
        }
    }

    #[test]
    fn test_layout_rows_stack_top_to_bottom() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status.y, 29);
        assert_eq!(layout.progress.y, 28);
        assert_eq!(layout.counter.y, 27);
        assert_eq!(layout.word.height, 5);
        assert_eq!(layout.editor.y, 0);
        assert_eq!(layout.editor.height, 19);
    }

    #[test]
    fn test_button_hit_test_uses_layout() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30));
        let (_, restart) = layout.buttons[4];
        assert_eq!(
            layout.button_at(restart.x + 1, restart.y + 1),
            Some(Command::Restart)
        );
        assert_eq!(layout.button_at(0, 0), None);
    }
}
