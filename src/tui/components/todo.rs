//! Todo list view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::screens::todo::{TodoFilter, TodoState};
use crate::tui::component::Component;
use crate::tui::components::{input_line, screen_block, status_line};

pub struct TodoView<'a> {
    state: &'a TodoState,
}

impl<'a> TodoView<'a> {
    pub fn new(state: &'a TodoState) -> Self {
        Self { state }
    }

    pub fn hints(state: &TodoState) -> &'static str {
        if state.input_mode {
            "Type todo • Enter add • Esc/Tab cancel • Ctrl+C quit"
        } else {
            "Tab new • Enter toggle • d delete • f filter • ↑/↓ navigate • Esc back"
        }
    }
}

impl Component for TodoView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let block = screen_block("📝 Todo List");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, input_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(if state.input_mode { 2 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let visible = state.visible();
        let done = state.items.iter().filter(|i| i.completed).count();
        let header = Line::from(vec![
            Span::styled(
                format!("Filter: {}", state.filter),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("   {done}/{} done", state.items.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), header_area);

        if state.input_mode {
            frame.render_widget(
                Paragraph::new(input_line("New todo", &state.input, true)),
                input_area,
            );
        }

        if visible.is_empty() {
            let empty = match state.filter {
                TodoFilter::All => "No todos yet. Press Tab to add one.",
                TodoFilter::Active => "No active todos.",
                TodoFilter::Completed => "No completed todos.",
            };
            frame.render_widget(
                Paragraph::new(Span::styled(empty, Style::default().fg(Color::DarkGray))),
                list_area,
            );
        } else {
            let items: Vec<ListItem> = visible
                .iter()
                .map(|item| {
                    let (check, style) = if item.completed {
                        (
                            "[✓]",
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::CROSSED_OUT),
                        )
                    } else {
                        ("[ ]", Style::default())
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{check} ")),
                        Span::styled(item.text.clone(), style),
                    ]))
                })
                .collect();
            let mut list_state = ListState::default();
            if !state.input_mode {
                list_state.select(Some(state.cursor.min(visible.len() - 1)));
            }
            let list = List::new(items)
                .highlight_symbol("▶ ")
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            frame.render_stateful_widget(list, list_area, &mut list_state);
        }

        frame.render_widget(Paragraph::new(status_line(&state.message)), status_area);
    }
}
