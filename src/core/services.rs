//! # Services
//!
//! Everything the screens need from the outside world: time, randomness,
//! host introspection, and the clipboard. Production code wires in the real
//! implementations; tests swap in fakes from `test_support`.

use std::time::Instant;

use chrono::{DateTime, Local};
use rand::RngCore;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use crate::tools::clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use crate::tools::host::{HostProbe, SystemProbe};

pub trait Clock {
    /// Monotonic time for timers.
    fn now(&self) -> Instant;
    /// Wall-clock time for timestamps and file names.
    fn local_now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub struct Services {
    pub clock: Box<dyn Clock>,
    pub rng: Box<dyn RngCore>,
    pub probe: Box<dyn SystemProbe>,
    pub clipboard: Box<dyn Clipboard>,
}

impl Services {
    pub fn system() -> Self {
        Self {
            clock: Box::new(SystemClock),
            rng: Box::new(StdRng::from_entropy()),
            probe: Box::new(HostProbe),
            clipboard: Box::new(SystemClipboard),
        }
    }
}
