//! System and network information views.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::screens::info::{NetworkInfoState, SystemInfoState};
use crate::tui::component::Component;
use crate::tui::components::{field_line, screen_block, status_line};

pub const HINTS: &str = "r refresh • Esc back • Ctrl+C quit";

fn footer(message: &str, last_update: Option<chrono::DateTime<chrono::Local>>) -> Vec<Line<'static>> {
    let mut lines = vec![status_line(message)];
    if let Some(at) = last_update {
        lines.push(Line::from(Span::styled(
            format!("Last updated: {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn path_or_unknown(path: Option<&std::path::Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub struct SystemInfoView<'a> {
    state: &'a SystemInfoState,
}

impl<'a> SystemInfoView<'a> {
    pub fn new(state: &'a SystemInfoState) -> Self {
        Self { state }
    }
}

impl Component for SystemInfoView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let info = &state.info;
        let block = screen_block("💻 System Information");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

        let os = match &info.os_version {
            Some(version) => format!("{} ({version})", info.os),
            None => info.os.clone(),
        };
        let lines = vec![
            field_line("OS", os),
            field_line("Architecture", info.arch.clone()),
            field_line("CPUs", info.cpu_count.to_string()),
            field_line("Runtime", info.runtime_version.clone()),
            Line::default(),
            field_line("Hostname", info.hostname.clone()),
            field_line("User", info.username.clone()),
            Line::default(),
            field_line("Home", path_or_unknown(info.home_dir.as_deref())),
            field_line("Working dir", path_or_unknown(info.working_dir.as_deref())),
            field_line("Temp dir", info.temp_dir.display().to_string()),
        ];
        frame.render_widget(Paragraph::new(lines), body_area);
        frame.render_widget(
            Paragraph::new(footer(&state.message, state.last_update)),
            footer_area,
        );
    }
}

pub struct NetworkInfoView<'a> {
    state: &'a NetworkInfoState,
}

impl<'a> NetworkInfoView<'a> {
    pub fn new(state: &'a NetworkInfoState) -> Self {
        Self { state }
    }
}

impl Component for NetworkInfoView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let block = screen_block("🌐 Network Information");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

        let mut lines = Vec::new();
        if state.interfaces.is_empty() {
            lines.push(Line::from(Span::styled(
                "No network interfaces found",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for iface in &state.interfaces {
            let (status, color) = if iface.is_up {
                ("up", Color::Green)
            } else {
                ("down", Color::Red)
            };
            let mut header = vec![
                Span::styled(iface.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(status, Style::default().fg(color)),
            ];
            if iface.is_loopback {
                header.push(Span::styled(" loopback", Style::default().fg(Color::DarkGray)));
            }
            lines.push(Line::from(header));
            if !iface.hardware_addr.is_empty() {
                lines.push(field_line("  MAC", iface.hardware_addr.clone()));
            }
            for addr in &iface.addresses {
                lines.push(field_line("  Address", addr.clone()));
            }
            lines.push(Line::default());
        }
        frame.render_widget(Paragraph::new(lines), body_area);
        frame.render_widget(
            Paragraph::new(footer(&state.message, state.last_update)),
            footer_area,
        );
    }
}
