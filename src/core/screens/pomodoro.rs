//! # Pomodoro Timer
//!
//! ```text
//! Work ──► ShortBreak ──► Work (session + 1) ──► ... ──► LongBreak
//!          (LongBreak when session % long_break_every == 0)
//! ```
//!
//! Natural completion and `s` (skip) both go through [`PomodoroState::advance_phase`].
//! Pausing banks the elapsed time so resuming continues the same phase.

use std::time::{Duration, Instant};

use log::info;

use crate::core::action::Key;
use crate::core::config::PomodoroDurations;
use crate::core::scheduler::{AnimationTimer, TimerId, TimerRequest};
use crate::core::screens::Outcome;
use crate::core::services::Services;
use crate::core::state::Screen;

pub const TICK_CADENCE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn is_break(self) -> bool {
        !matches!(self, Phase::Work)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Work Session",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PomodoroState {
    pub phase: Phase,
    /// Work session number, starting at 1.
    pub session: u32,
    pub durations: PomodoroDurations,
    /// Time spent in this phase before the latest pause.
    pub banked: Duration,
    pub completed: bool,
    pub message: String,
    pub timer: AnimationTimer,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self::new(PomodoroDurations::default())
    }
}

impl PomodoroState {
    pub fn new(durations: PomodoroDurations) -> Self {
        Self {
            phase: Phase::Work,
            session: 1,
            durations,
            banked: Duration::ZERO,
            completed: false,
            message: String::new(),
            timer: AnimationTimer::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn phase_duration(&self) -> Duration {
        match self.phase {
            Phase::Work => self.durations.work,
            Phase::ShortBreak => self.durations.short_break,
            Phase::LongBreak => self.durations.long_break,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        if self.is_running() {
            self.banked + self.timer.elapsed(now)
        } else {
            self.banked
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.phase_duration().saturating_sub(self.elapsed(now))
    }

    /// Fraction of the phase done, in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.phase_duration().as_secs_f64();
        if total == 0.0 {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f64() / total).clamp(0.0, 1.0)
    }

    /// Screen-entry reset. A running timer needs a fresh tick.
    pub fn enter(&mut self) -> Option<TimerRequest> {
        self.message.clear();
        self.is_running()
            .then(|| self.timer.request(TimerId::Pomodoro, TICK_CADENCE))
    }

    pub fn handle(&mut self, key: Key, services: &mut Services) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Enter | Key::Char(' ') => {
                let now = services.clock.now();
                if self.is_running() {
                    self.banked += self.timer.elapsed(now);
                    self.timer.stop();
                    self.message = "Timer paused".to_string();
                } else {
                    self.timer.start(now);
                    self.completed = false;
                    self.message = if self.phase.is_break() {
                        "Break time! Relax and recharge 😌".to_string()
                    } else {
                        "Focus time! Stay productive 🎯".to_string()
                    };
                    return Outcome::Schedule(self.timer.request(TimerId::Pomodoro, TICK_CADENCE));
                }
            }
            Key::Char('r') => {
                if self.is_running() {
                    self.timer.stop();
                }
                self.banked = Duration::ZERO;
                self.completed = false;
                self.message = "Timer reset".to_string();
            }
            Key::Char('s') if self.is_running() => self.advance_phase(true),
            _ => {}
        }
        Outcome::Stay
    }

    pub fn on_tick(&mut self, generation: u64, now: Instant) -> Outcome {
        if !self.timer.is_current(generation) {
            return Outcome::Stay;
        }
        if self.elapsed(now) >= self.phase_duration() {
            self.advance_phase(false);
            return Outcome::Stay;
        }
        Outcome::Schedule(self.timer.request(TimerId::Pomodoro, TICK_CADENCE))
    }

    /// Finish the current phase and line up the next one. The timer stops;
    /// the next phase starts on the user's command.
    pub fn advance_phase(&mut self, skipped: bool) {
        if self.is_running() {
            self.timer.stop();
        }
        self.banked = Duration::ZERO;
        self.completed = true;

        if self.phase.is_break() {
            self.phase = Phase::Work;
            self.session += 1;
            self.message = if skipped {
                "Break skipped! Ready for next work session".to_string()
            } else {
                "Break complete! Ready for next work session 💪".to_string()
            };
        } else {
            let long = self.session % self.durations.long_break_every == 0;
            self.phase = if long { Phase::LongBreak } else { Phase::ShortBreak };
            self.message = match (long, skipped) {
                (true, true) => "Work session complete! Time for a long break",
                (true, false) => "Work session complete! Time for a long break ☕",
                (false, true) => "Work session complete! Time for a short break",
                (false, false) => "Work session complete! Time for a short break 🌱",
            }
            .to_string();
        }
        info!("Pomodoro now {:?}, session {}", self.phase, self.session);
    }
}

/// `MM:SS`
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
