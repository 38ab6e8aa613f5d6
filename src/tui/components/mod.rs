//! # TUI Components
//!
//! One view per screen, plus the shared help bar.
//!
//! ## Component Architecture
//!
//! Every view is a transient wrapper created each frame around a borrowed
//! screen state from `core`:
//!
//! ```rust,ignore
//! DiceView::new(&app.dice, now).render(frame, body);
//! ```
//!
//! The state lives in `App` for the whole session; the view only reads it.
//! Anything time-dependent (animation frames, the pomodoro countdown) is
//! computed from the `now` prop, so views stay deterministic under test.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file, shared helpers)
//! ├── help_bar.rs        (bottom key hints)
//! ├── menu.rs            (main menu with filter)
//! ├── qr.rs              (QR code generator)
//! ├── dice.rs            (dice roller)
//! ├── wheel.rs           (wheel spinner)
//! ├── rpg.rs             (class select + character sheet)
//! ├── todo.rs            (todo list)
//! ├── pomodoro.rs        (pomodoro timer)
//! ├── base64.rs          (base64 codec)
//! ├── info.rs            (system + network info)
//! └── unit_converter.rs  (unit converter)
//! ```

pub mod base64;
pub mod dice;
pub mod help_bar;
pub mod info;
pub mod menu;
pub mod pomodoro;
pub mod qr;
pub mod rpg;
pub mod todo;
pub mod unit_converter;
pub mod wheel;

pub use self::base64::Base64View;
pub use dice::DiceView;
pub use help_bar::HelpBar;
pub use info::{NetworkInfoView, SystemInfoView};
pub use menu::MenuView;
pub use pomodoro::PomodoroView;
pub use qr::QrView;
pub use rpg::{ClassSelectView, CharacterView};
pub use todo::TodoView;
pub use unit_converter::UnitConverterView;
pub use wheel::WheelView;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding};

/// Bordered frame every screen draws its body in.
pub fn screen_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Left)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
}

/// Transient status line. Success and failure messages carry their own marker.
pub fn status_line(message: &str) -> Line<'static> {
    let style = if message.starts_with('✅') || message.starts_with('✓') {
        Style::default().fg(Color::Green)
    } else if message.starts_with('❌') {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Line::from(Span::styled(message.to_string(), style))
}

/// A row in a selectable list: cursor marker plus highlight when selected.
pub fn cursor_line(text: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("▶ {text}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ))
    } else {
        Line::from(Span::styled(format!("  {text}"), Style::default().fg(Color::Gray)))
    }
}

/// `label: value` with the label dimmed.
pub fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value.into()),
    ])
}

/// Text being typed, with a block cursor.
pub fn input_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let cursor = if focused { "▏" } else { "" };
    let style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{value}{cursor}"), style),
    ])
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Renders `view` over a whole test terminal and returns the text.
#[cfg(test)]
pub(crate) fn render_view(width: u16, height: u16, view: &mut impl crate::tui::component::Component) -> String {
    crate::test_support::render_to_text(width, height, |f| {
        let area = f.area();
        view.render(f, area);
    })
}
