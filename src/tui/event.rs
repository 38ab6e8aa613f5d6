use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::{Action, Key};

/// Translate a terminal event into a core action. Key releases and repeats
/// are dropped, as are keys no screen listens to.
pub fn map_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    let key = match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Some(Action::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char(c)) => Key::Ctrl(c.to_ascii_lowercase()),
        (_, KeyCode::Char(c)) => Key::Char(c),
        (_, KeyCode::Enter) => Key::Enter,
        (_, KeyCode::Backspace) => Key::Backspace,
        (_, KeyCode::Esc) => Key::Escape,
        (_, KeyCode::Tab) => Key::Tab,
        (_, KeyCode::Up) => Key::Up,
        (_, KeyCode::Down) => Key::Down,
        _ => return None,
    };
    Some(Action::Key(key))
}
