//! Wheel spinner screen: build a list of options, spin, get one back.

use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;

use crate::core::action::Key;
use crate::core::scheduler::{AnimationTimer, TimerId};
use crate::core::screens::Outcome;
use crate::core::services::Services;
use crate::core::state::Screen;

pub const SPIN_DURATION: Duration = Duration::from_secs(3);

/// Ticks slow down as the spin goes on: 50 ms plus 1 ms per 20 ms elapsed.
pub fn spin_cadence(elapsed: Duration) -> Duration {
    Duration::from_millis(50 + elapsed.as_millis() as u64 / 20)
}

#[derive(Debug, Clone, Default)]
pub struct WheelState {
    pub items: Vec<String>,
    pub timer: AnimationTimer,
    /// Winner of the last spin, drawn when the spin starts.
    pub result: String,
    /// Item highlighted by the animation.
    pub spin_index: usize,
    pub input_mode: bool,
    pub input: String,
}

impl WheelState {
    /// Screen-entry reset. Items are kept.
    pub fn reset(&mut self) {
        if self.timer.is_running() {
            self.timer.stop();
        }
        self.result.clear();
        self.input_mode = false;
        self.input.clear();
    }

    pub fn is_spinning(&self) -> bool {
        self.timer.is_running()
    }

    pub fn handle(&mut self, key: Key, services: &mut Services) -> Outcome {
        match key {
            Key::Escape if self.input_mode => {
                self.input_mode = false;
                self.input.clear();
            }
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Tab if !self.is_spinning() => {
                self.input_mode = !self.input_mode;
                self.input.clear();
            }
            Key::Enter if self.input_mode => {
                let item = self.input.trim();
                if !item.is_empty() {
                    self.items.push(item.to_string());
                    self.input.clear();
                    self.input_mode = false;
                }
            }
            Key::Enter if !self.items.is_empty() && !self.is_spinning() => {
                let winner = services.rng.gen_range(0..self.items.len());
                self.result = self.items[winner].clone();
                self.spin_index = 0;
                self.timer.start(services.clock.now());
                debug!("Spinning {} items, winner {:?}", self.items.len(), self.result);
                return Outcome::Schedule(self.timer.request(TimerId::Wheel, spin_cadence(Duration::ZERO)));
            }
            Key::Backspace if self.input_mode => {
                self.input.pop();
            }
            Key::Backspace if !self.is_spinning() => {
                if self.items.pop().is_some() && self.items.is_empty() {
                    self.result.clear();
                }
            }
            Key::Char(c) if self.input_mode => self.input.push(c),
            _ => {}
        }
        Outcome::Stay
    }

    pub fn on_tick(&mut self, generation: u64, now: Instant) -> Outcome {
        if !self.timer.is_current(generation) || self.items.is_empty() {
            return Outcome::Stay;
        }
        let elapsed = self.timer.elapsed(now);
        if elapsed >= SPIN_DURATION {
            self.timer.stop();
            if let Some(i) = self.items.iter().position(|item| *item == self.result) {
                self.spin_index = i;
            }
            return Outcome::Stay;
        }
        self.spin_index = (self.spin_index + 1) % self.items.len();
        Outcome::Schedule(self.timer.request(TimerId::Wheel, spin_cadence(elapsed)))
    }
}
