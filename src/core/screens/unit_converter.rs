//! Unit converter screen.
//!
//! Focus cycles Value → Category → From → To with Tab. Up/Down step the
//! focused selector (wrapping); changing the category resets from/to to the
//! category's first two units.

use crate::core::action::Key;
use crate::core::screens::{Outcome, step_wrapping};
use crate::core::state::Screen;
use crate::tools::units::{Category, convert_in, format_result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Value,
    Category,
    From,
    To,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Value => Focus::Category,
            Focus::Category => Focus::From,
            Focus::From => Focus::To,
            Focus::To => Focus::Value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UnitConverterState {
    pub category: Category,
    pub from: &'static str,
    pub to: &'static str,
    pub value: String,
    pub result: String,
    pub message: String,
    pub focus: Focus,
}

impl Default for UnitConverterState {
    fn default() -> Self {
        let category = Category::ALL[0];
        let (from, to) = category.default_pair();
        Self {
            category,
            from,
            to,
            value: String::new(),
            result: String::new(),
            message: String::new(),
            focus: Focus::Value,
        }
    }
}

/// Neighbour of `current` in `options`, wrapping. Unknown values start from the top.
fn step_option<T: PartialEq + Copy>(options: &[T], current: T, down: bool) -> T {
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    options[step_wrapping(index, options.len(), down)]
}

impl UnitConverterState {
    /// Screen-entry reset: everything back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_output(&mut self) {
        self.result.clear();
        self.message.clear();
    }

    fn step(&mut self, down: bool) {
        match self.focus {
            Focus::Value => {}
            Focus::Category => {
                self.category = step_option(&Category::ALL, self.category, down);
                (self.from, self.to) = self.category.default_pair();
                self.clear_output();
            }
            Focus::From => {
                let names: Vec<&'static str> = self.category.unit_names().collect();
                self.from = step_option(&names, self.from, down);
                self.clear_output();
            }
            Focus::To => {
                let names: Vec<&'static str> = self.category.unit_names().collect();
                self.to = step_option(&names, self.to, down);
                self.clear_output();
            }
        }
    }

    fn convert(&mut self) {
        let value: f64 = match self.value.parse() {
            Ok(v) => v,
            Err(_) => {
                self.result.clear();
                self.message = "Invalid number format".to_string();
                return;
            }
        };
        match convert_in(value, self.from, self.to, self.category) {
            Ok(result) => {
                self.result = format_result(result);
                self.message = "Conversion completed".to_string();
            }
            Err(e) => {
                self.result.clear();
                self.message = format!("Conversion error: {e}");
            }
        }
    }

    pub fn handle(&mut self, key: Key) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Tab => self.focus = self.focus.next(),
            Key::Up => self.step(false),
            Key::Down => self.step(true),
            Key::Enter => self.convert(),
            Key::Ctrl('r') => {
                self.value.clear();
                self.clear_output();
            }
            Key::Backspace if self.focus == Focus::Value => {
                if self.value.pop().is_some() {
                    self.clear_output();
                }
            }
            Key::Char(c) if self.focus == Focus::Value && (c.is_ascii_digit() || c == '.' || c == '-') => {
                self.value.push(c);
                self.clear_output();
            }
            _ => {}
        }
        Outcome::Stay
    }
}
