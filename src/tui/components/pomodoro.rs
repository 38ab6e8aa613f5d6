//! Pomodoro timer view. The countdown is computed from `now` each frame.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::core::screens::pomodoro::{Phase, PomodoroState, format_remaining};
use crate::tui::component::Component;
use crate::tui::components::{field_line, screen_block, status_line};

pub struct PomodoroView<'a> {
    state: &'a PomodoroState,
    now: Instant,
}

impl<'a> PomodoroView<'a> {
    pub fn new(state: &'a PomodoroState, now: Instant) -> Self {
        Self { state, now }
    }

    pub fn hints(state: &PomodoroState) -> &'static str {
        if state.is_running() {
            "Enter/Space pause • s skip • r reset • Esc back"
        } else {
            "Enter/Space start • r reset • Esc back • Ctrl+C quit"
        }
    }
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => Color::LightRed,
        Phase::ShortBreak => Color::LightGreen,
        Phase::LongBreak => Color::LightBlue,
    }
}

impl Component for PomodoroView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let block = screen_block("🍅 Pomodoro Timer");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [info_area, clock_area, gauge_area, _, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        let color = phase_color(state.phase);
        let run_state = if state.is_running() {
            "Running"
        } else if state.elapsed(self.now).is_zero() {
            "Ready"
        } else {
            "Paused"
        };
        let info = vec![
            Line::from(Span::styled(
                state.phase.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            field_line("Session", state.session.to_string()),
            field_line("Status", run_state),
        ];
        frame.render_widget(Paragraph::new(info), info_area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format_remaining(state.remaining(self.now)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            clock_area,
        );

        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(color))
                .ratio(state.progress(self.now)),
            gauge_area,
        );

        frame.render_widget(Paragraph::new(status_line(&state.message)), status_area);
    }
}
