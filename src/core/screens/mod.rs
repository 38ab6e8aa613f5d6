//! # Screen Controllers
//!
//! One sub-state per screen. Each owns its slice of the application state
//! and turns keys (and, for animated screens, timer ticks) into an
//! [`Outcome`] for the navigation shell.
//!
//! ```text
//! Key ──► XxxState::handle() ──► Outcome ──► update() ──► Effect
//! ```
//!
//! Controllers never switch screens themselves. They ask the shell to via
//! `Outcome::Enter` (entry reset applied) or `Outcome::Switch` (state kept).

pub mod base64;
pub mod dice;
pub mod info;
pub mod menu;
pub mod pomodoro;
pub mod qr;
pub mod rpg;
pub mod todo;
pub mod unit_converter;
pub mod wheel;

use crate::core::scheduler::TimerRequest;
use crate::core::state::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stay,
    Schedule(TimerRequest),
    /// Navigate, applying the target's entry reset.
    Enter(Screen),
    /// Navigate, keeping the target's state as it is.
    Switch(Screen),
    Quit,
}

/// Move `cursor` by one within `len` items, clamped at both ends.
pub(crate) fn step_clamped(cursor: usize, len: usize, down: bool) -> usize {
    if down {
        if cursor + 1 < len { cursor + 1 } else { cursor }
    } else {
        cursor.saturating_sub(1)
    }
}

/// Move `cursor` by one within `len` items, wrapping around.
pub(crate) fn step_wrapping(cursor: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (cursor + 1) % len
    } else {
        (cursor + len - 1) % len
    }
}
