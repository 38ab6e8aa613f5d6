//! Base64 encoder/decoder view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::screens::base64::{Base64Mode, Base64State};
use crate::tui::component::Component;
use crate::tui::components::{screen_block, status_line};

pub const HINTS: &str = "Tab switch mode • Enter process • Ctrl+R clear • Esc back • Ctrl+C quit";

pub struct Base64View<'a> {
    state: &'a Base64State,
}

impl<'a> Base64View<'a> {
    pub fn new(state: &'a Base64State) -> Self {
        Self { state }
    }
}

fn mode_tab(mode: Base64Mode, active: Base64Mode) -> Span<'static> {
    let label = format!(" {} ", mode.label().to_uppercase());
    if mode == active {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

impl Component for Base64View<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let block = screen_block("🔐 Base64 Encoder/Decoder");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [mode_area, input_area, output_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        let tabs = Line::from(vec![
            Span::raw("Mode: "),
            mode_tab(Base64Mode::Encode, state.mode),
            Span::raw(" "),
            mode_tab(Base64Mode::Decode, state.mode),
        ]);
        frame.render_widget(Paragraph::new(tabs), mode_area);

        let (input_title, output_title) = match state.mode {
            Base64Mode::Encode => (" Text ", " Base64 "),
            Base64Mode::Decode => (" Base64 ", " Text "),
        };
        frame.render_widget(
            Paragraph::new(format!("{}▏", state.input))
                .wrap(Wrap { trim: false })
                .block(Block::bordered().title(input_title)),
            input_area,
        );
        frame.render_widget(
            Paragraph::new(state.output.as_str())
                .style(Style::default().fg(Color::Green))
                .wrap(Wrap { trim: false })
                .block(
                    Block::bordered()
                        .title(output_title)
                        .border_style(Style::default().fg(Color::DarkGray)),
                ),
            output_area,
        );
        frame.render_widget(Paragraph::new(status_line(&state.message)), status_area);
    }
}
