//! Main menu view: the filtered choice list, centered.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem, ListState};

use crate::core::screens::menu::MenuState;
use crate::tui::component::Component;
use crate::tui::components::{centered_rect, cursor_line, input_line, screen_block};

pub struct MenuView<'a> {
    state: &'a MenuState,
}

impl<'a> MenuView<'a> {
    pub fn new(state: &'a MenuState) -> Self {
        Self { state }
    }

    pub fn hints(state: &MenuState) -> &'static str {
        if state.filter_mode {
            "Type to filter • ↑/↓ navigate • Enter select • Esc clear filter"
        } else {
            "↑/↓ or j/k navigate • Enter select • / filter • q quit"
        }
    }
}

impl Component for MenuView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 80, area);
        frame.render_widget(Clear, overlay);

        let mut items: Vec<ListItem> = Vec::new();
        if self.state.filter_mode || !self.state.filter.is_empty() {
            items.push(ListItem::new(input_line(
                "Filter",
                &self.state.filter,
                self.state.filter_mode,
            )));
            items.push(ListItem::new(Line::default()));
        }
        let header = items.len();

        if self.state.filtered.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                "  No matches found",
                Style::default().fg(Color::DarkGray),
            ))));
        } else {
            items.extend(self.state.filtered.iter().enumerate().map(|(row, &choice)| {
                ListItem::new(cursor_line(MenuState::label(choice), row == self.state.cursor))
            }));
        }

        let mut list_state = ListState::default();
        if !self.state.filtered.is_empty() {
            list_state.select(Some(header + self.state.cursor));
        }
        let list = List::new(items).block(screen_block("🎯 Toolbox"));
        frame.render_stateful_widget(list, overlay, &mut list_state);
    }
}
