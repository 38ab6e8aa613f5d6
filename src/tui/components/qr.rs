//! QR code generator view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::screens::qr::QrState;
use crate::tui::component::Component;
use crate::tui::components::{input_line, screen_block, status_line};

pub const HINTS: &str = "Enter generate • Ctrl+D copy image • Esc back • Ctrl+C quit";

pub struct QrView<'a> {
    state: &'a QrState,
}

impl<'a> QrView<'a> {
    pub fn new(state: &'a QrState) -> Self {
        Self { state }
    }
}

impl Component for QrView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let mut lines = vec![input_line("Text", &state.input, true), Line::default()];

        // Black on white regardless of the terminal theme
        let code_style = Style::default().fg(Color::Black).bg(Color::White);
        lines.extend(
            state
                .code
                .iter()
                .map(|row| Line::from(Span::styled(row.clone(), code_style))),
        );
        if !state.code.is_empty() {
            lines.push(Line::default());
        }

        if let Some(path) = &state.image_path {
            lines.push(Line::from(Span::styled(
                format!("Image saved to {}", path.display()),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if state.copied {
            lines.push(status_line("✓ QR code image copied to clipboard!"));
        }
        if state.clipboard_disabled {
            lines.push(Line::from(Span::styled(
                "Clipboard copy is not available here",
                Style::default().fg(Color::DarkGray),
            )));
        }
        if !state.message.is_empty() {
            lines.push(status_line(&state.message));
        }

        frame.render_widget(
            Paragraph::new(lines).block(screen_block("📱 QR Code Generator")),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Key;
    use crate::test_support::FakeClipboard;
    use crate::tui::components::render_view;

    #[test]
    fn test_qr_renders_code_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = QrState::new(dir.path().join("qr.png"));
        let mut clipboard = FakeClipboard::default();
        for c in "hi".chars() {
            state.handle(Key::Char(c), &mut clipboard);
        }
        state.handle(Key::Enter, &mut clipboard);
        state.handle(Key::Ctrl('d'), &mut clipboard);

        let text = render_view(80, 50, &mut QrView::new(&state));
        assert!(text.contains("Text: hi"));
        assert!(text.contains('▀') || text.contains('▄') || text.contains('█'));
        assert!(text.contains("Image saved to"));
        assert!(text.contains("copied to clipboard"));
    }

    #[test]
    fn test_qr_empty_state() {
        let state = QrState::new("qr.png".into());
        let text = render_view(80, 10, &mut QrView::new(&state));
        assert!(text.contains("QR Code Generator"));
        assert!(!text.contains("Image saved to"));
    }
}
