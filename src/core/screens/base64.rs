//! Base64 encoder/decoder screen. Output follows the input as it is typed.

use crate::core::action::Key;
use crate::core::screens::Outcome;
use crate::core::state::Screen;
use crate::tools::codec;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Base64Mode {
    #[default]
    Encode,
    Decode,
}

impl Base64Mode {
    pub fn label(self) -> &'static str {
        match self {
            Base64Mode::Encode => "encode",
            Base64Mode::Decode => "decode",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Base64State {
    pub mode: Base64Mode,
    pub input: String,
    pub output: String,
    pub message: String,
}

impl Base64State {
    /// Screen-entry reset. The mode is kept.
    pub fn reset(&mut self) {
        self.input.clear();
        self.output.clear();
        self.message.clear();
    }

    pub fn handle(&mut self, key: Key) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Tab => {
                self.mode = match self.mode {
                    Base64Mode::Encode => Base64Mode::Decode,
                    Base64Mode::Decode => Base64Mode::Encode,
                };
                self.input.clear();
                self.output.clear();
                self.message = format!("Switched to {} mode", self.mode.label());
            }
            Key::Enter => self.process(),
            Key::Ctrl('r') => {
                self.reset();
                self.message = "Cleared".to_string();
            }
            Key::Backspace => {
                if self.input.pop().is_some() {
                    self.process_live();
                }
            }
            Key::Char(c) => {
                self.input.push(c);
                self.process_live();
            }
            _ => {}
        }
        Outcome::Stay
    }

    fn process(&mut self) {
        if self.input.trim().is_empty() {
            self.message = "Please enter some text to process".to_string();
            return;
        }
        match self.mode {
            Base64Mode::Encode => {
                self.output = codec::encode(&self.input);
                self.message = "✅ Text encoded to Base64".to_string();
            }
            Base64Mode::Decode => match codec::decode(&self.input) {
                Ok(text) => {
                    self.output = text;
                    self.message = "✅ Base64 decoded to text".to_string();
                }
                Err(e) => {
                    self.output.clear();
                    self.message = format!("❌ Invalid Base64 input: {e}");
                }
            },
        }
    }

    fn process_live(&mut self) {
        if self.input.is_empty() {
            self.output.clear();
            self.message.clear();
            return;
        }
        match self.mode {
            Base64Mode::Encode => {
                self.output = codec::encode(&self.input);
                self.message.clear();
            }
            Base64Mode::Decode => match codec::decode(&self.input) {
                Ok(text) => {
                    self.output = text;
                    self.message.clear();
                }
                Err(_) => {
                    self.output.clear();
                    self.message = "Invalid Base64...".to_string();
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: &mut Base64State, s: &str) {
        for c in s.chars() {
            state.handle(Key::Char(c));
        }
    }

    #[test]
    fn test_live_encode() {
        let mut state = Base64State::default();
        typed(&mut state, "hi");
        assert_eq!(state.output, "aGk=");
        state.handle(Key::Enter);
        assert_eq!(state.message, "✅ Text encoded to Base64");
    }

    #[test]
    fn test_decode_mode() {
        let mut state = Base64State::default();
        state.handle(Key::Tab);
        assert_eq!(state.mode, Base64Mode::Decode);
        assert_eq!(state.message, "Switched to decode mode");
        typed(&mut state, "aGk=");
        assert_eq!(state.output, "hi");
        state.handle(Key::Enter);
        assert_eq!(state.message, "✅ Base64 decoded to text");
    }

    #[test]
    fn test_invalid_decode() {
        let mut state = Base64State::default();
        state.handle(Key::Tab);
        typed(&mut state, "aGk");
        assert!(state.output.is_empty());
        assert_eq!(state.message, "Invalid Base64...");
        state.handle(Key::Enter);
        assert!(state.output.is_empty());
        assert!(state.message.starts_with("❌ Invalid Base64 input"));
        // Input kept for editing
        assert_eq!(state.input, "aGk");
    }

    #[test]
    fn test_blank_enter() {
        let mut state = Base64State::default();
        typed(&mut state, "  ");
        state.handle(Key::Enter);
        assert_eq!(state.message, "Please enter some text to process");
    }

    #[test]
    fn test_backspace_reprocesses() {
        let mut state = Base64State::default();
        typed(&mut state, "hi!");
        state.handle(Key::Backspace);
        assert_eq!(state.output, "aGk=");
        state.handle(Key::Backspace);
        state.handle(Key::Backspace);
        assert!(state.output.is_empty());
    }

    #[test]
    fn test_ctrl_r_clears_and_reset_keeps_mode() {
        let mut state = Base64State::default();
        state.handle(Key::Tab);
        typed(&mut state, "aGk=");
        state.handle(Key::Ctrl('r'));
        assert!(state.input.is_empty() && state.output.is_empty());
        assert_eq!(state.message, "Cleared");
        state.reset();
        assert_eq!(state.mode, Base64Mode::Decode);
    }
}
