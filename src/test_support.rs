//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, TimeZone};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

use crate::core::config::ResolvedConfig;
use crate::core::services::{Clipboard, ClipboardError, Clock, Services, SystemProbe};
use crate::core::state::App;
use crate::tools::host::{NetworkInterface, SystemInfo};

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone)]
pub struct FakeClock {
    now: Rc<Cell<Instant>>,
    started: Instant,
}

impl FakeClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            now: Rc::new(Cell::new(now)),
            started: now,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn now(&self) -> Instant {
        self.now.get()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    /// 2024-03-09 14:05:07 local, plus however far the clock was advanced.
    fn local_now(&self) -> DateTime<Local> {
        let base = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .unwrap_or_else(Local::now);
        let offset = self.now.get().saturating_duration_since(self.started);
        base + chrono::Duration::from_std(offset).unwrap_or(chrono::Duration::zero())
    }
}

/// Canned host data.
pub struct FakeProbe;

impl SystemProbe for FakeProbe {
    fn system_info(&mut self) -> SystemInfo {
        SystemInfo {
            os: "linux".into(),
            os_version: Some("Linux 6.1 Test".into()),
            arch: "x86_64".into(),
            cpu_count: 8,
            runtime_version: "toolbox 0.1.0".into(),
            hostname: "testhost".into(),
            username: "tester".into(),
            home_dir: Some(PathBuf::from("/home/tester")),
            working_dir: Some(PathBuf::from("/work")),
            temp_dir: PathBuf::from("/tmp"),
        }
    }

    fn network_interfaces(&mut self) -> Vec<NetworkInterface> {
        vec![
            NetworkInterface {
                name: "lo".into(),
                addresses: vec!["127.0.0.1/8".into()],
                hardware_addr: String::new(),
                is_up: true,
                is_loopback: true,
            },
            NetworkInterface {
                name: "eth0".into(),
                addresses: vec!["192.168.1.20/24".into()],
                hardware_addr: "aa:bb:cc:dd:ee:ff".into(),
                is_up: true,
                is_loopback: false,
            },
        ]
    }
}

/// Records copies instead of touching the real clipboard.
#[derive(Default)]
pub struct FakeClipboard {
    pub copied: Vec<PathBuf>,
    pub attempts: usize,
    unsupported: bool,
    failing: bool,
}

impl FakeClipboard {
    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }
}

impl Clipboard for FakeClipboard {
    fn copy_image(&mut self, path: &Path) -> Result<(), ClipboardError> {
        self.attempts += 1;
        if self.unsupported {
            return Err(ClipboardError::Unsupported("no clipboard in tests".into()));
        }
        if self.failing {
            return Err(ClipboardError::Failed("no clipboard tool found".into()));
        }
        self.copied.push(path.to_path_buf());
        Ok(())
    }
}

/// Seeded services plus a handle on their clock.
pub fn test_services() -> (Services, FakeClock) {
    let clock = FakeClock::new();
    let services = Services {
        clock: Box::new(clock.clone()),
        rng: Box::new(StdRng::seed_from_u64(42)),
        probe: Box::new(FakeProbe),
        clipboard: Box::new(FakeClipboard::default()),
    };
    (services, clock)
}

/// Config pointing every file into `dir`.
pub fn test_config(dir: &Path) -> ResolvedConfig {
    ResolvedConfig {
        todo_file: dir.join("todos.json"),
        export_dir: dir.join("exports"),
        qr_image_path: dir.join("qrcode.png"),
        log_file: None,
        ..ResolvedConfig::default()
    }
}

/// Creates a test App whose files live in a temp dir. Keep the dir alive.
pub fn test_app() -> (App, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let app = App::new(&test_config(dir.path()));
    (app, dir)
}

/// Draws once on a `TestBackend` and returns the buffer, one line per row.
pub fn render_to_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("create test terminal");
    terminal.draw(draw).expect("draw frame");
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
