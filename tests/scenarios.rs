//! End-to-end scenarios driven through `update`, the same way the event loop
//! drives the app: key actions in, effects out, timers through the scheduler.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, TimeZone};
use rand::SeedableRng;
use rand::rngs::StdRng;

use toolbox::core::action::{Action, Effect, Key, update};
use toolbox::core::config::ResolvedConfig;
use toolbox::core::scheduler::Scheduler;
use toolbox::core::screens::todo::TodoFilter;
use toolbox::core::services::{Clipboard, ClipboardError, Clock, Services, SystemProbe};
use toolbox::core::state::{App, Screen};
use toolbox::core::todo_store::TodoStore;
use toolbox::tools::host::{NetworkInterface, SystemInfo};

// ============================================================================
// Fakes
// ============================================================================

#[derive(Clone)]
struct ManualClock(Rc<Cell<Instant>>);

impl ManualClock {
    fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.0.get()
    }

    fn local_now(&self) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 6, 1, 9, 30, 0)
            .single()
            .unwrap_or_else(Local::now)
    }
}

struct QuietProbe;

impl SystemProbe for QuietProbe {
    fn system_info(&mut self) -> SystemInfo {
        SystemInfo {
            hostname: "scenario".into(),
            ..Default::default()
        }
    }

    fn network_interfaces(&mut self) -> Vec<NetworkInterface> {
        Vec::new()
    }
}

struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy_image(&mut self, _path: &Path) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported("scenario".into()))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn services() -> (Services, ManualClock) {
    let clock = ManualClock(Rc::new(Cell::new(Instant::now())));
    let services = Services {
        clock: Box::new(clock.clone()),
        rng: Box::new(StdRng::seed_from_u64(7)),
        probe: Box::new(QuietProbe),
        clipboard: Box::new(NoClipboard),
    };
    (services, clock)
}

fn config_in(dir: &Path) -> ResolvedConfig {
    ResolvedConfig {
        todo_file: dir.join("todos.json"),
        export_dir: dir.join("exports"),
        qr_image_path: dir.join("qr.png"),
        log_file: None,
        ..ResolvedConfig::default()
    }
}

fn press(app: &mut App, services: &mut Services, key: Key) -> Effect {
    update(app, Action::Key(key), services)
}

fn type_text(app: &mut App, services: &mut Services, text: &str) {
    for c in text.chars() {
        press(app, services, Key::Char(c));
    }
}

/// From the menu, move down `steps` entries and open that screen.
fn open_from_menu(app: &mut App, services: &mut Services, steps: usize) -> Effect {
    assert_eq!(app.screen, Screen::Menu);
    for _ in 0..steps {
        press(app, services, Key::Down);
    }
    press(app, services, Key::Enter)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_length_meter_to_foot() {
    let dir = tempfile::tempdir().unwrap();
    let (mut services, _clock) = services();
    let mut app = App::new(&config_in(dir.path()));

    open_from_menu(&mut app, &mut services, 7);
    assert_eq!(app.screen, Screen::UnitConverter);

    type_text(&mut app, &mut services, "10");
    press(&mut app, &mut services, Key::Tab);
    press(&mut app, &mut services, Key::Tab);
    press(&mut app, &mut services, Key::Down);
    press(&mut app, &mut services, Key::Down);
    press(&mut app, &mut services, Key::Tab);
    for _ in 0..4 {
        press(&mut app, &mut services, Key::Down);
    }
    assert_eq!((app.unit_converter.from, app.unit_converter.to), ("meter", "foot"));

    press(&mut app, &mut services, Key::Enter);
    assert_eq!(app.unit_converter.result, "32.808399");
}

#[test]
fn test_base64_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let (mut services, _clock) = services();
    let mut app = App::new(&config_in(dir.path()));

    open_from_menu(&mut app, &mut services, 6);
    assert_eq!(app.screen, Screen::Base64);

    type_text(&mut app, &mut services, "hi");
    press(&mut app, &mut services, Key::Enter);
    assert_eq!(app.base64.output, "aGk=");

    press(&mut app, &mut services, Key::Tab);
    assert!(app.base64.input.is_empty());
    type_text(&mut app, &mut services, "aGk=");
    press(&mut app, &mut services, Key::Enter);
    assert_eq!(app.base64.output, "hi");
}

#[test]
fn test_todo_add_toggle_filter() {
    let dir = tempfile::tempdir().unwrap();
    let (mut services, _clock) = services();
    let config = config_in(dir.path());
    let mut app = App::new(&config);

    open_from_menu(&mut app, &mut services, 4);
    assert_eq!(app.screen, Screen::TodoList);

    for text in ["first", "second"] {
        press(&mut app, &mut services, Key::Tab);
        type_text(&mut app, &mut services, text);
        press(&mut app, &mut services, Key::Enter);
    }
    press(&mut app, &mut services, Key::Down);
    press(&mut app, &mut services, Key::Enter);

    press(&mut app, &mut services, Key::Char('f'));
    press(&mut app, &mut services, Key::Char('f'));
    assert_eq!(app.todo.filter, TodoFilter::Completed);
    let visible: Vec<&str> = app.todo.visible().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(visible, vec!["second"]);

    // A fresh start sees the same list
    let reloaded = TodoStore::new(PathBuf::from(&config.todo_file)).load();
    assert_eq!(reloaded.len(), 2);
    assert!(!reloaded[0].completed);
    assert!(reloaded[1].completed);
}

#[test]
fn test_dice_roll_through_scheduler() {
    let dir = tempfile::tempdir().unwrap();
    let (mut services, clock) = services();
    let mut app = App::new(&config_in(dir.path()));
    let mut scheduler = Scheduler::new();

    open_from_menu(&mut app, &mut services, 1);
    let Effect::Schedule(request) = press(&mut app, &mut services, Key::Enter) else {
        panic!("rolling should arm a timer");
    };
    scheduler.arm(request, clock.now());

    let mut ticks = 0;
    while let Some(deadline) = scheduler.next_deadline() {
        clock.0.set(deadline);
        for action in scheduler.take_due(clock.now()) {
            ticks += 1;
            if let Effect::Schedule(request) = update(&mut app, action, &mut services) {
                scheduler.arm(request, clock.now());
            }
        }
        assert!(ticks < 100, "animation never settled");
    }

    assert!(!app.dice.is_rolling());
    assert!((1..=4).contains(&app.dice.result));
    assert!(ticks >= 20);
}

#[test]
fn test_leaving_mid_roll_stops_the_animation() {
    let dir = tempfile::tempdir().unwrap();
    let (mut services, clock) = services();
    let mut app = App::new(&config_in(dir.path()));
    let mut scheduler = Scheduler::new();

    open_from_menu(&mut app, &mut services, 1);
    let Effect::Schedule(request) = press(&mut app, &mut services, Key::Enter) else {
        panic!("rolling should arm a timer");
    };
    scheduler.arm(request, clock.now());
    press(&mut app, &mut services, Key::Escape);

    clock.advance(Duration::from_millis(100));
    let due = scheduler.take_due(clock.now());
    assert_eq!(due.len(), 1);
    for action in due {
        assert_eq!(update(&mut app, action, &mut services), Effect::None);
    }
    assert!(scheduler.next_deadline().is_none());
}

#[test]
fn test_clipboard_unsupported_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let (mut services, _clock) = services();
    let mut app = App::new(&config_in(dir.path()));

    open_from_menu(&mut app, &mut services, 0);
    type_text(&mut app, &mut services, "hello");
    press(&mut app, &mut services, Key::Enter);
    assert!(!app.qr.code.is_empty());
    assert!(dir.path().join("qr.png").exists());

    press(&mut app, &mut services, Key::Ctrl('d'));
    assert!(app.qr.clipboard_disabled);
    assert!(!app.qr.copied);
}

#[test]
fn test_quit_from_menu() {
    let dir = tempfile::tempdir().unwrap();
    let (mut services, _clock) = services();
    let mut app = App::new(&config_in(dir.path()));
    assert_eq!(press(&mut app, &mut services, Key::Char('q')), Effect::Quit);
    assert_eq!(open_from_menu(&mut app, &mut services, 10), Effect::Quit);
}
