//! # Timers
//!
//! Animated screens drive themselves with one-shot ticks. Each screen owns an
//! [`AnimationTimer`]; the event loop owns a [`Scheduler`] holding at most
//! one pending deadline per [`TimerId`].
//!
//! ```text
//! start()  → generation += 1, running
//! stop()   → generation += 1, idle
//! tick(g)  → honoured only if running && g == generation
//! ```
//!
//! A tick armed before a stop or restart carries an old generation and is
//! dropped without re-arming.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::core::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    Dice,
    Wheel,
    Rpg,
    Pomodoro,
}

/// Ask the event loop for one tick after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub timer: TimerId,
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct AnimationTimer {
    running: bool,
    started_at: Option<Instant>,
    generation: u64,
}

impl AnimationTimer {
    pub fn start(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.running = true;
        self.started_at = Some(now);
        self.generation
    }

    pub fn stop(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Whether a tick armed with `generation` still belongs to this run.
    pub fn is_current(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or_default()
    }

    pub fn request(&self, timer: TimerId, delay: Duration) -> TimerRequest {
        TimerRequest {
            timer,
            generation: self.generation,
            delay,
        }
    }
}

/// Pending deadlines, one per timer.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: HashMap<TimerId, (Instant, u64)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a tick. Replaces any deadline already pending for the same timer.
    pub fn arm(&mut self, request: TimerRequest, now: Instant) {
        debug!(
            "Arming {:?} gen {} in {:?}",
            request.timer, request.generation, request.delay
        );
        self.pending
            .insert(request.timer, (now + request.delay, request.generation));
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|(deadline, _)| *deadline).min()
    }

    /// Remove every deadline at or before `now` and turn it into a tick action,
    /// earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Action> {
        let mut due: Vec<(Instant, TimerId, u64)> = self
            .pending
            .iter()
            .filter(|(_, (deadline, _))| *deadline <= now)
            .map(|(id, (deadline, generation))| (*deadline, *id, *generation))
            .collect();
        due.sort_by_key(|(deadline, _, _)| *deadline);

        due.into_iter()
            .map(|(_, timer, generation)| {
                self.pending.remove(&timer);
                Action::Tick { timer, generation }
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
