//! Wheel spinner view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::screens::wheel::WheelState;
use crate::tui::component::Component;
use crate::tui::components::{cursor_line, input_line, screen_block};

pub struct WheelView<'a> {
    state: &'a WheelState,
}

impl<'a> WheelView<'a> {
    pub fn new(state: &'a WheelState) -> Self {
        Self { state }
    }

    pub fn hints(state: &WheelState) -> &'static str {
        if state.input_mode {
            "Type item • Enter add • Esc cancel • Ctrl+C quit"
        } else {
            "Tab add item • Enter spin • Backspace remove last • Esc back"
        }
    }

    fn banner(&self) -> Vec<Line<'static>> {
        let state = self.state;
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if state.items.is_empty() {
            return vec![
                Line::from(Span::styled("Wheel is Empty", bold.fg(Color::DarkGray))),
                Line::default(),
                Line::from("Add some items first!"),
            ];
        }
        if state.is_spinning() {
            let current = state.items.get(state.spin_index).cloned().unwrap_or_default();
            return vec![
                Line::from(Span::styled("Spinning...", bold.fg(Color::LightYellow))),
                Line::default(),
                Line::from(Span::styled(format!("▶ {current} ◀"), bold)),
            ];
        }
        if !state.result.is_empty() {
            return vec![
                Line::from(Span::styled("Winner!", bold.fg(Color::Green))),
                Line::default(),
                Line::from(Span::styled(state.result.clone(), bold)),
            ];
        }
        vec![
            Line::from(Span::styled("Ready to Spin!", bold.fg(Color::Cyan))),
            Line::default(),
            Line::from("Press Enter to start"),
        ]
    }
}

impl Component for WheelView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let block = screen_block("🎡 Wheel Spinner");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [banner_area, input_area, items_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(self.banner())
                .centered()
                .block(Block::bordered().border_style(Style::default().fg(Color::Magenta))),
            banner_area,
        );

        if state.input_mode {
            frame.render_widget(
                Paragraph::new(input_line("New item", &state.input, true)),
                input_area,
            );
        }

        let mut lines = vec![Line::from(format!("Items ({}):", state.items.len()))];
        lines.extend(state.items.iter().enumerate().map(|(i, item)| {
            cursor_line(item, state.is_spinning() && i == state.spin_index)
        }));
        frame.render_widget(Paragraph::new(lines), items_area);
    }
}
