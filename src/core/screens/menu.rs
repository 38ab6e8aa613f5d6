//! Main menu with an incremental, case-insensitive filter.

use crate::core::action::Key;
use crate::core::screens::{Outcome, step_clamped};
use crate::core::state::Screen;

/// Menu labels in display order, with the screen each opens. `None` quits.
pub const CHOICES: [(&str, Option<Screen>); 11] = [
    ("QR Code Generator", Some(Screen::QrCode)),
    ("Dice Roller", Some(Screen::DiceRoller)),
    ("Wheel Spinner", Some(Screen::WheelSpinner)),
    ("RPG Character Creator", Some(Screen::RpgClassSelect)),
    ("Todo List", Some(Screen::TodoList)),
    ("Pomodoro Timer", Some(Screen::Pomodoro)),
    ("Base64 Encoder/Decoder", Some(Screen::Base64)),
    ("Unit Converter", Some(Screen::UnitConverter)),
    ("System Info", Some(Screen::SystemInfo)),
    ("Network Info", Some(Screen::NetworkInfo)),
    ("Quit", None),
];

#[derive(Debug, Clone)]
pub struct MenuState {
    pub cursor: usize,
    pub filter_mode: bool,
    pub filter: String,
    /// Indices into [`CHOICES`] matching `filter`, in display order.
    pub filtered: Vec<usize>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            cursor: 0,
            filter_mode: false,
            filter: String::new(),
            filtered: (0..CHOICES.len()).collect(),
        }
    }
}

/// Indices of labels containing `filter`, ignoring case.
pub fn filter_choices(labels: &[&str], filter: &str) -> Vec<usize> {
    let needle = filter.to_lowercase();
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

fn labels() -> Vec<&'static str> {
    CHOICES.iter().map(|(label, _)| *label).collect()
}

impl MenuState {
    pub fn label(index: usize) -> &'static str {
        CHOICES[index].0
    }

    /// The highlighted choice, if the filtered view is non-empty.
    pub fn selected(&self) -> Option<usize> {
        self.filtered.get(self.cursor).copied()
    }

    fn refilter(&mut self) {
        self.filtered = filter_choices(&labels(), &self.filter);
        self.cursor = 0;
    }

    fn clear_filter(&mut self) {
        self.filter_mode = false;
        self.filter.clear();
        self.refilter();
    }

    fn move_cursor(&mut self, down: bool) {
        self.cursor = step_clamped(self.cursor, self.filtered.len(), down);
    }

    fn select(&mut self) -> Outcome {
        let Some(choice) = self.selected() else {
            return Outcome::Stay;
        };
        self.clear_filter();
        match CHOICES[choice].1 {
            Some(screen) => Outcome::Enter(screen),
            None => Outcome::Quit,
        }
    }

    pub fn handle(&mut self, key: Key) -> Outcome {
        match key {
            Key::Up => self.move_cursor(false),
            Key::Down => self.move_cursor(true),
            Key::Enter | Key::Char(' ') => return self.select(),
            Key::Escape if self.filter_mode => self.clear_filter(),
            Key::Backspace if self.filter_mode => {
                if self.filter.pop().is_some() {
                    self.refilter();
                }
            }
            Key::Char(c) if self.filter_mode => {
                self.filter.push(c);
                self.refilter();
            }
            Key::Char('/') => {
                self.filter_mode = true;
                self.filter.clear();
                self.refilter();
            }
            Key::Char('q') => return Outcome::Quit,
            Key::Char('k') => self.move_cursor(false),
            Key::Char('j') => self.move_cursor(true),
            _ => {}
        }
        Outcome::Stay
    }
}
