//! # Actions
//!
//! Everything that can happen in the toolbox becomes an `Action`.
//! User presses a key? That's `Action::Key(key)`.
//! A timer deadline passes? That's `Action::Tick { timer, generation }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an [`Effect`] for the event loop to carry out.
//! The only I/O here is what the screens do synchronously (todo writes,
//! exports, clipboard), all through injected services.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```

use log::{debug, info};

use crate::core::scheduler::{TimerId, TimerRequest};
use crate::core::screens::Outcome;
use crate::core::services::Services;
use crate::core::state::{App, Screen, Viewport};

/// A key press, already stripped of terminal details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Enter,
    Backspace,
    Escape,
    Tab,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    Tick { timer: TimerId, generation: u64 },
    Resize { width: u16, height: u16 },
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Schedule(TimerRequest),
}

pub fn update(app: &mut App, action: Action, services: &mut Services) -> Effect {
    match action {
        Action::Quit | Action::Key(Key::Ctrl('c')) => Effect::Quit,
        Action::Resize { width, height } => {
            app.viewport = Viewport { width, height };
            Effect::None
        }
        Action::Tick { timer, generation } => tick(app, timer, generation, services),
        Action::Key(key) => {
            let outcome = dispatch_key(app, key, services);
            apply(app, outcome, services)
        }
    }
}

fn dispatch_key(app: &mut App, key: Key, services: &mut Services) -> Outcome {
    match app.screen {
        Screen::Menu => app.menu.handle(key),
        Screen::QrCode => app.qr.handle(key, services.clipboard.as_mut()),
        Screen::DiceRoller => app.dice.handle(key, services),
        Screen::WheelSpinner => app.wheel.handle(key, services),
        Screen::RpgClassSelect => app.rpg.handle_class_select(key),
        Screen::RpgCharacter => app.rpg.handle_character(key, services),
        Screen::TodoList => app.todo.handle(key, services),
        Screen::Pomodoro => app.pomodoro.handle(key, services),
        Screen::Base64 => app.base64.handle(key),
        Screen::SystemInfo => app.system_info.handle(key, services),
        Screen::NetworkInfo => app.network_info.handle(key, services),
        Screen::UnitConverter => app.unit_converter.handle(key),
    }
}

/// The screen whose animation a timer drives.
fn owner(timer: TimerId) -> Screen {
    match timer {
        TimerId::Dice => Screen::DiceRoller,
        TimerId::Wheel => Screen::WheelSpinner,
        TimerId::Rpg => Screen::RpgCharacter,
        TimerId::Pomodoro => Screen::Pomodoro,
    }
}

fn tick(app: &mut App, timer: TimerId, generation: u64, services: &Services) -> Effect {
    if app.screen != owner(timer) {
        debug!("Dropping {:?} tick gen {}: screen inactive", timer, generation);
        return Effect::None;
    }
    let now = services.clock.now();
    let outcome = match timer {
        TimerId::Dice => app.dice.on_tick(generation, now),
        TimerId::Wheel => app.wheel.on_tick(generation, now),
        TimerId::Rpg => app.rpg.on_tick(generation, now),
        TimerId::Pomodoro => app.pomodoro.on_tick(generation, now),
    };
    match outcome {
        Outcome::Schedule(request) => Effect::Schedule(request),
        _ => Effect::None,
    }
}

fn apply(app: &mut App, outcome: Outcome, services: &mut Services) -> Effect {
    match outcome {
        Outcome::Stay => Effect::None,
        Outcome::Schedule(request) => Effect::Schedule(request),
        Outcome::Quit => Effect::Quit,
        Outcome::Switch(screen) => {
            info!("Switching to {:?}", screen);
            app.screen = screen;
            Effect::None
        }
        Outcome::Enter(screen) => enter_screen(app, screen, services),
    }
}

/// Navigate to `screen` and apply its entry reset.
pub fn enter_screen(app: &mut App, screen: Screen, services: &mut Services) -> Effect {
    info!("Entering {:?}", screen);
    app.screen = screen;
    match screen {
        Screen::Menu => {}
        Screen::QrCode => app.qr.reset(),
        Screen::DiceRoller => app.dice.reset(),
        Screen::WheelSpinner => app.wheel.reset(),
        Screen::RpgClassSelect => app.rpg.reset_class_select(),
        Screen::RpgCharacter => app.rpg.enter_character(services),
        Screen::TodoList => app.todo.reset(),
        Screen::Pomodoro => {
            if let Some(request) = app.pomodoro.enter() {
                return Effect::Schedule(request);
            }
        }
        Screen::Base64 => app.base64.reset(),
        Screen::UnitConverter => app.unit_converter.reset(),
        Screen::SystemInfo => app.system_info.load(services),
        Screen::NetworkInfo => app.network_info.load(services),
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_services};
    use std::time::Duration;

    fn open(app: &mut App, services: &mut Services, label: &str) -> Effect {
        let index = crate::core::screens::menu::CHOICES
            .iter()
            .position(|(l, _)| *l == label)
            .unwrap();
        app.screen = Screen::Menu;
        app.menu.cursor = index;
        update(app, Action::Key(Key::Enter), services)
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let (mut app, _dir) = test_app();
        let (mut services, _clock) = test_services();
        app.screen = Screen::TodoList;
        app.todo.input_mode = true;
        assert_eq!(update(&mut app, Action::Key(Key::Ctrl('c')), &mut services), Effect::Quit);
        assert_eq!(update(&mut app, Action::Quit, &mut services), Effect::Quit);
        // The todo input never saw it
        assert!(app.todo.input.is_empty());
    }

    #[test]
    fn test_resize_only_touches_viewport() {
        let (mut app, _dir) = test_app();
        let (mut services, _clock) = test_services();
        app.screen = Screen::Base64;
        app.base64.input = "keep".to_string();
        let effect = update(&mut app, Action::Resize { width: 120, height: 40 }, &mut services);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.viewport, Viewport { width: 120, height: 40 });
        assert_eq!(app.screen, Screen::Base64);
        assert_eq!(app.base64.input, "keep");
    }

    #[test]
    fn test_escape_returns_to_menu_keeping_state() {
        let (mut app, _dir) = test_app();
        let (mut services, _clock) = test_services();
        open(&mut app, &mut services, "Base64 Encoder/Decoder");
        update(&mut app, Action::Key(Key::Char('x')), &mut services);
        update(&mut app, Action::Key(Key::Escape), &mut services);
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.base64.input, "x");
    }

    #[test]
    fn test_entry_resets() {
        let (mut app, _dir) = test_app();
        let (mut services, _clock) = test_services();

        app.base64.input = "stale".into();
        app.base64.mode = crate::core::screens::base64::Base64Mode::Decode;
        open(&mut app, &mut services, "Base64 Encoder/Decoder");
        assert!(app.base64.input.is_empty());
        assert_eq!(app.base64.mode, crate::core::screens::base64::Base64Mode::Decode);

        app.wheel.items = vec!["kept".into()];
        app.wheel.result = "old".into();
        open(&mut app, &mut services, "Wheel Spinner");
        assert_eq!(app.wheel.items, vec!["kept"]);
        assert!(app.wheel.result.is_empty());

        app.unit_converter.value = "12".into();
        open(&mut app, &mut services, "Unit Converter");
        assert!(app.unit_converter.value.is_empty());

        open(&mut app, &mut services, "System Info");
        assert_eq!(app.screen, Screen::SystemInfo);
        assert_eq!(app.system_info.message, "System information loaded");

        open(&mut app, &mut services, "Network Info");
        assert_eq!(app.network_info.message, "Network information loaded");
    }

    #[test]
    fn test_rpg_flow_through_shell() {
        let (mut app, _dir) = test_app();
        let (mut services, _clock) = test_services();
        open(&mut app, &mut services, "RPG Character Creator");
        assert_eq!(app.screen, Screen::RpgClassSelect);
        update(&mut app, Action::Key(Key::Down), &mut services);
        update(&mut app, Action::Key(Key::Enter), &mut services);
        assert_eq!(app.screen, Screen::RpgCharacter);
        assert_eq!(
            app.rpg.character.as_ref().and_then(|c| c.class),
            Some(crate::tools::character::Class::Rogue)
        );
        update(&mut app, Action::Key(Key::Char('b')), &mut services);
        assert_eq!(app.screen, Screen::RpgClassSelect);
        assert_eq!(app.rpg.class_cursor, 1);
    }

    #[test]
    fn test_tick_for_inactive_screen_is_dropped() {
        let (mut app, _dir) = test_app();
        let (mut services, clock) = test_services();
        open(&mut app, &mut services, "Dice Roller");
        let Effect::Schedule(req) = update(&mut app, Action::Key(Key::Enter), &mut services) else {
            panic!("roll should schedule");
        };
        update(&mut app, Action::Key(Key::Escape), &mut services);
        clock.advance(Duration::from_millis(100));
        let effect = update(
            &mut app,
            Action::Tick {
                timer: req.timer,
                generation: req.generation,
            },
            &mut services,
        );
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_tick_rearms_while_running() {
        let (mut app, _dir) = test_app();
        let (mut services, clock) = test_services();
        open(&mut app, &mut services, "Dice Roller");
        let Effect::Schedule(req) = update(&mut app, Action::Key(Key::Enter), &mut services) else {
            panic!("roll should schedule");
        };
        clock.advance(Duration::from_millis(100));
        let tick = Action::Tick {
            timer: req.timer,
            generation: req.generation,
        };
        assert!(matches!(update(&mut app, tick, &mut services), Effect::Schedule(_)));
        clock.advance(Duration::from_secs(2));
        assert_eq!(update(&mut app, tick, &mut services), Effect::None);
        assert!(!app.dice.is_rolling());
    }

    #[test]
    fn test_pomodoro_rearmed_on_entry() {
        let (mut app, _dir) = test_app();
        let (mut services, _clock) = test_services();
        open(&mut app, &mut services, "Pomodoro Timer");
        assert!(matches!(
            update(&mut app, Action::Key(Key::Enter), &mut services),
            Effect::Schedule(_)
        ));
        update(&mut app, Action::Key(Key::Escape), &mut services);
        let effect = open(&mut app, &mut services, "Pomodoro Timer");
        let Effect::Schedule(req) = effect else {
            panic!("running pomodoro should be re-armed");
        };
        assert_eq!(req.timer, TimerId::Pomodoro);
        assert!(app.pomodoro.is_running());
    }

    #[test]
    fn test_quit_entry_quits() {
        let (mut app, _dir) = test_app();
        let (mut services, _clock) = test_services();
        assert_eq!(open(&mut app, &mut services, "Quit"), Effect::Quit);
    }
}
