//! Unit converter view. The focused field is highlighted.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::screens::unit_converter::{Focus, UnitConverterState};
use crate::tools::units::display_name;
use crate::tui::component::Component;
use crate::tui::components::{screen_block, status_line};

pub const HINTS: &str = "Tab next field • ↑/↓ change • Enter convert • Ctrl+R clear • Esc back";

pub struct UnitConverterView<'a> {
    state: &'a UnitConverterState,
}

impl<'a> UnitConverterView<'a> {
    pub fn new(state: &'a UnitConverterState) -> Self {
        Self { state }
    }
}

fn field(label: &str, value: String, focused: bool) -> Line<'static> {
    let (marker, style) = if focused {
        (
            "▶ ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(Color::White))
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {value} "), style),
    ])
}

impl Component for UnitConverterView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let block = screen_block("🔄 Unit Converter");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [fields_area, result_area, status_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .areas(inner);

        let value = if state.focus == Focus::Value {
            format!("{}▏", state.value)
        } else {
            state.value.clone()
        };
        let fields = vec![
            field("Value", value, state.focus == Focus::Value),
            field("Category", state.category.name().to_string(), state.focus == Focus::Category),
            field("From", display_name(state.from), state.focus == Focus::From),
            field("To", display_name(state.to), state.focus == Focus::To),
        ];
        frame.render_widget(Paragraph::new(fields), fields_area);

        if !state.result.is_empty() {
            let result = Line::from(vec![
                Span::raw(format!("{} {} = ", state.value, display_name(state.from))),
                Span::styled(
                    format!("{} {}", state.result, display_name(state.to)),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(Paragraph::new(result), result_area);
        }

        frame.render_widget(Paragraph::new(status_line(&state.message)), status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Key;
    use crate::tui::components::render_view;

    #[test]
    fn test_defaults_render() {
        let state = UnitConverterState::default();
        let text = render_view(80, 12, &mut UnitConverterView::new(&state));
        assert!(text.contains("▶ Value"));
        assert!(text.contains("Length"));
        assert!(text.contains("millimeter"));
        assert!(text.contains("centimeter"));
    }

    #[test]
    fn test_result_line() {
        let mut state = UnitConverterState::default();
        for c in "10".chars() {
            state.handle(Key::Char(c));
        }
        state.handle(Key::Enter);
        let text = render_view(80, 12, &mut UnitConverterView::new(&state));
        assert!(text.contains("10 millimeter = 1.000000 centimeter"));
        assert!(text.contains("Conversion completed"));
    }

    #[test]
    fn test_focus_moves_highlight() {
        let mut state = UnitConverterState::default();
        state.handle(Key::Tab);
        let text = render_view(80, 12, &mut UnitConverterView::new(&state));
        assert!(text.contains("▶ Category"));
        assert!(!text.contains("▶ Value"));
    }
}
