//! # HelpBar Component
//!
//! Bottom line showing where you are and which keys do what.
//!
//! ## Conditional Formatting
//!
//! 1. **With hints**: `"Toolbox › Dice Roller | ↑/↓ select • Enter roll"`
//! 2. **Without hints**: `"Toolbox › Dice Roller"`
//!
//! Hints that do not fit the width are dropped whole rather than cut mid-word.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub struct HelpBar {
    /// Screen name shown after the app name.
    pub location: String,
    /// Key hints, `•`-separated.
    pub hints: String,
}

impl HelpBar {
    pub fn new(location: impl Into<String>, hints: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            hints: hints.into(),
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!("Toolbox › {}", self.location),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        let hints = format!(" | {}", self.hints);
        let used = spans[0].content.width() + hints.width();
        if !self.hints.is_empty() && used <= area.width as usize {
            spans.push(Span::styled(
                hints,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
