//! Dice roller view: die picker, rolling animation, result face.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::screens::dice::{DiceState, ROLL_CADENCE};
use crate::tools::dice::Die;
use crate::tui::component::Component;
use crate::tui::components::{cursor_line, screen_block};

pub const HINTS: &str = "↑/↓ or j/k navigate • Enter roll • Esc back • Ctrl+C quit";

const ROLLING_FRAMES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

/// Pips for 1 through 6; bigger results are drawn as a number.
pub fn die_face(result: u32) -> [String; 5] {
    let middle: [&str; 3] = match result {
        1 => ["         ", "    ●    ", "         "],
        2 => ["  ●      ", "         ", "      ●  "],
        3 => ["  ●      ", "    ●    ", "      ●  "],
        4 => ["  ●   ●  ", "         ", "  ●   ●  "],
        5 => ["  ●   ●  ", "    ●    ", "  ●   ●  "],
        6 => ["  ●   ●  ", "  ●   ●  ", "  ●   ●  "],
        _ => return [
            "┌─────────┐".to_string(),
            "│         │".to_string(),
            format!("│   {result:>2}    │"),
            "│         │".to_string(),
            "└─────────┘".to_string(),
        ],
    };
    [
        "┌─────────┐".to_string(),
        format!("│{}│", middle[0]),
        format!("│{}│", middle[1]),
        format!("│{}│", middle[2]),
        "└─────────┘".to_string(),
    ]
}

pub struct DiceView<'a> {
    state: &'a DiceState,
    now: Instant,
}

impl<'a> DiceView<'a> {
    pub fn new(state: &'a DiceState, now: Instant) -> Self {
        Self { state, now }
    }

    fn result_lines(&self) -> Vec<Line<'static>> {
        let state = self.state;
        let Some(die) = state.die else {
            return Vec::new();
        };
        if state.is_rolling() {
            let step = state.timer.elapsed(self.now).as_millis() / ROLL_CADENCE.as_millis();
            let frame = ROLLING_FRAMES[step as usize % ROLLING_FRAMES.len()];
            return vec![Line::from(Span::styled(
                format!("Rolling {die}... {frame}"),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ))];
        }
        if state.result == 0 {
            return Vec::new();
        }
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{die} Result: {}", state.result),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(die_face(state.result).into_iter().map(Line::from));
        lines
    }
}

impl Component for DiceView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = screen_block("🎲 Dice Roller");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [picker_area, result_area] =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(inner);

        let mut picker = vec![Line::from("Choose your dice:"), Line::default()];
        picker.extend(
            Die::ALL
                .iter()
                .enumerate()
                .map(|(i, die)| cursor_line(die.label(), i == self.state.cursor)),
        );
        frame.render_widget(Paragraph::new(picker), picker_area);

        let result = self.result_lines();
        if !result.is_empty() {
            let panel = Block::bordered()
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Cyan));
            frame.render_widget(Paragraph::new(result).block(panel), result_area);
        }
    }
}
