//! Dice roller screen. The result is drawn when the roll starts and revealed
//! once the two-second animation ends.

use std::time::{Duration, Instant};

use log::debug;

use crate::core::action::Key;
use crate::core::scheduler::{AnimationTimer, TimerId};
use crate::core::screens::{Outcome, step_clamped};
use crate::core::services::Services;
use crate::core::state::Screen;
use crate::tools::dice::Die;

pub const ROLL_DURATION: Duration = Duration::from_secs(2);
pub const ROLL_CADENCE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default)]
pub struct DiceState {
    pub cursor: usize,
    pub result: u32,
    /// Die of the last roll; `None` before the first roll.
    pub die: Option<Die>,
    pub timer: AnimationTimer,
}

impl DiceState {
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.result = 0;
        self.die = None;
        if self.timer.is_running() {
            self.timer.stop();
        }
    }

    pub fn is_rolling(&self) -> bool {
        self.timer.is_running()
    }

    pub fn highlighted(&self) -> Die {
        Die::ALL[self.cursor.min(Die::ALL.len() - 1)]
    }

    pub fn handle(&mut self, key: Key, services: &mut Services) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Up | Key::Char('k') => self.cursor = step_clamped(self.cursor, Die::ALL.len(), false),
            Key::Down | Key::Char('j') => self.cursor = step_clamped(self.cursor, Die::ALL.len(), true),
            Key::Enter | Key::Char(' ') if !self.is_rolling() => {
                let die = self.highlighted();
                self.die = Some(die);
                self.result = die.roll(services.rng.as_mut());
                self.timer.start(services.clock.now());
                debug!("Rolling {} (result {})", die, self.result);
                return Outcome::Schedule(self.timer.request(TimerId::Dice, ROLL_CADENCE));
            }
            _ => {}
        }
        Outcome::Stay
    }

    pub fn on_tick(&mut self, generation: u64, now: Instant) -> Outcome {
        if !self.timer.is_current(generation) {
            return Outcome::Stay;
        }
        if self.timer.elapsed(now) >= ROLL_DURATION {
            self.timer.stop();
            return Outcome::Stay;
        }
        Outcome::Schedule(self.timer.request(TimerId::Dice, ROLL_CADENCE))
    }
}
