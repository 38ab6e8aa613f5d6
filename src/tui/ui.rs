use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{
    Base64View, CharacterView, ClassSelectView, DiceView, HelpBar, MenuView, NetworkInfoView,
    PomodoroView, QrView, SystemInfoView, TodoView, UnitConverterView, WheelView, base64, dice,
    info, qr, rpg, unit_converter,
};

/// Screen name and key hints for the help bar.
fn help_for(app: &App) -> (&'static str, &'static str) {
    match app.screen {
        Screen::Menu => ("Menu", MenuView::hints(&app.menu)),
        Screen::QrCode => ("QR Code Generator", qr::HINTS),
        Screen::DiceRoller => ("Dice Roller", dice::HINTS),
        Screen::WheelSpinner => ("Wheel Spinner", WheelView::hints(&app.wheel)),
        Screen::RpgClassSelect => ("RPG Character Creator", rpg::CLASS_HINTS),
        Screen::RpgCharacter => ("RPG Character Creator", rpg::SHEET_HINTS),
        Screen::TodoList => ("Todo List", TodoView::hints(&app.todo)),
        Screen::Pomodoro => ("Pomodoro Timer", PomodoroView::hints(&app.pomodoro)),
        Screen::Base64 => ("Base64 Encoder/Decoder", base64::HINTS),
        Screen::SystemInfo => ("System Info", info::HINTS),
        Screen::NetworkInfo => ("Network Info", info::HINTS),
        Screen::UnitConverter => ("Unit Converter", unit_converter::HINTS),
    }
}

fn draw_screen(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    match app.screen {
        Screen::Menu => MenuView::new(&app.menu).render(frame, area),
        Screen::QrCode => QrView::new(&app.qr).render(frame, area),
        Screen::DiceRoller => DiceView::new(&app.dice, now).render(frame, area),
        Screen::WheelSpinner => WheelView::new(&app.wheel).render(frame, area),
        Screen::RpgClassSelect => ClassSelectView::new(&app.rpg).render(frame, area),
        Screen::RpgCharacter => CharacterView::new(&app.rpg, now).render(frame, area),
        Screen::TodoList => TodoView::new(&app.todo).render(frame, area),
        Screen::Pomodoro => PomodoroView::new(&app.pomodoro, now).render(frame, area),
        Screen::Base64 => Base64View::new(&app.base64).render(frame, area),
        Screen::SystemInfo => SystemInfoView::new(&app.system_info).render(frame, area),
        Screen::NetworkInfo => NetworkInfoView::new(&app.network_info).render(frame, area),
        Screen::UnitConverter => UnitConverterView::new(&app.unit_converter).render(frame, area),
    }
}

/// Draw the active screen plus the help bar. `now` drives animations.
pub fn draw_ui(frame: &mut Frame, app: &App, now: Instant) {
    use Constraint::{Length, Min};
    let [main_area, help_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    draw_screen(frame, main_area, app, now);

    let (location, hints) = help_for(app);
    HelpBar::new(location, hints).render(frame, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_to_text, test_app, test_services};

    const ALL_SCREENS: [Screen; 12] = [
        Screen::Menu,
        Screen::QrCode,
        Screen::DiceRoller,
        Screen::WheelSpinner,
        Screen::RpgClassSelect,
        Screen::RpgCharacter,
        Screen::TodoList,
        Screen::Pomodoro,
        Screen::Base64,
        Screen::SystemInfo,
        Screen::NetworkInfo,
        Screen::UnitConverter,
    ];

    #[test]
    fn test_draw_every_screen() {
        let (mut app, _dir) = test_app();
        let (_services, clock) = test_services();
        for screen in ALL_SCREENS {
            app.screen = screen;
            let text = render_to_text(100, 30, |f| draw_ui(f, &app, clock.now()));
            assert!(text.contains("Toolbox ›"), "help bar missing on {screen:?}");
        }
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let (app, _dir) = test_app();
        let (_services, clock) = test_services();
        render_to_text(10, 3, |f| draw_ui(f, &app, clock.now()));
    }

    #[test]
    fn test_help_follows_screen() {
        let (mut app, _dir) = test_app();
        let (_services, clock) = test_services();
        app.screen = Screen::DiceRoller;
        let text = render_to_text(120, 30, |f| draw_ui(f, &app, clock.now()));
        assert!(text.contains("Toolbox › Dice Roller"));
        assert!(text.contains("Enter roll"));
    }
}
