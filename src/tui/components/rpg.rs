//! RPG character creator views: class picker and character sheet.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::screens::rpg::{ROLL_CADENCE, RpgState};
use crate::tools::character::{Character, Class};
use crate::tui::component::Component;
use crate::tui::components::{cursor_line, screen_block, status_line};

pub const CLASS_HINTS: &str = "↑/↓ or j/k navigate • Enter select • Esc back • Ctrl+C quit";
pub const SHEET_HINTS: &str =
    "Enter roll • r reroll • s save text • p save HTML • b classes • Esc back";

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct ClassSelectView<'a> {
    state: &'a RpgState,
}

impl<'a> ClassSelectView<'a> {
    pub fn new(state: &'a RpgState) -> Self {
        Self { state }
    }
}

impl Component for ClassSelectView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from("Select your character class:"), Line::default()];
        for (i, class) in Class::ALL.iter().enumerate() {
            let (primary, secondary) = class.key_abilities();
            let mut line = cursor_line(&format!("{:<10}", class.name()), i == self.state.class_cursor);
            line.push_span(Span::styled(
                format!("  {} / {}", primary.name(), secondary.name()),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(line);
        }
        frame.render_widget(
            Paragraph::new(lines).block(screen_block("⚔ Choose Your Class")),
            area,
        );
    }
}

pub struct CharacterView<'a> {
    state: &'a RpgState,
    now: Instant,
}

impl<'a> CharacterView<'a> {
    pub fn new(state: &'a RpgState, now: Instant) -> Self {
        Self { state, now }
    }
}

fn ability_lines(character: &Character) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Ability Scores",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (ability, score) in character.scores.iter() {
        let mut spans = vec![Span::raw(format!("{:<13} {:>2}", ability.name(), score))];
        if let Some(marker) = character.marker(ability) {
            let color = if marker == "Primary" {
                Color::Yellow
            } else {
                Color::LightBlue
            };
            spans.push(Span::styled(format!("  ({marker})"), Style::default().fg(color)));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Gold: {} gp", character.gold),
        Style::default().fg(Color::Yellow),
    )));
    lines
}

fn gear_lines(character: &Character) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (heading, list) in [
        ("Weapons", &character.gear.weapons),
        ("Armor", &character.gear.armor),
        ("Equipment", &character.gear.items),
    ] {
        if list.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(list.iter().map(|entry| Line::from(format!("• {entry}"))));
        lines.push(Line::default());
    }
    lines
}

impl Component for CharacterView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let title = match state.selected_class {
            Some(class) => format!("⚔ {} Character", class.name()),
            None => "⚔ RPG Character Creator".to_string(),
        };
        let block = screen_block(&title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [sheet_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        frame.render_widget(Paragraph::new(status_line(&state.export_status)), status_area);

        if state.is_rolling() {
            let step = state.timer.elapsed(self.now).as_millis() / ROLL_CADENCE.as_millis();
            let spinner = SPINNER[step as usize % SPINNER.len()];
            frame.render_widget(
                Paragraph::new(format!("{spinner} Rolling ability scores...")).centered(),
                sheet_area,
            );
            return;
        }

        let Some(character) = &state.character else {
            frame.render_widget(
                Paragraph::new("Ready to create your character!\n\nPress Enter to roll stats")
                    .centered(),
                sheet_area,
            );
            return;
        };

        let [stats_area, gear_area] =
            Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).areas(sheet_area);
        frame.render_widget(
            Paragraph::new(ability_lines(character)).block(
                Block::bordered().border_style(Style::default().fg(Color::DarkGray)),
            ),
            stats_area,
        );
        frame.render_widget(Paragraph::new(gear_lines(character)), gear_area);
    }
}
