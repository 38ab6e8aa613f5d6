//! # Application State
//!
//! Core business state for the toolbox. This module contains domain logic
//! only, no TUI-specific types. Presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen                 // which controller gets input
//! ├── viewport: Viewport             // last known terminal size
//! ├── menu: MenuState
//! ├── qr: QrState
//! ├── dice: DiceState
//! ├── wheel: WheelState
//! ├── rpg: RpgState                  // class select + character sheet
//! ├── todo: TodoState                // backed by TodoStore
//! ├── pomodoro: PomodoroState
//! ├── base64: Base64State
//! ├── unit_converter: UnitConverterState
//! ├── system_info: SystemInfoState
//! └── network_info: NetworkInfoState
//! ```
//!
//! Every sub-state lives for the whole session. Navigating away never tears
//! one down; entry resets are applied by `action::enter_screen`.

use crate::core::config::ResolvedConfig;
use crate::core::screens::base64::Base64State;
use crate::core::screens::dice::DiceState;
use crate::core::screens::info::{NetworkInfoState, SystemInfoState};
use crate::core::screens::menu::MenuState;
use crate::core::screens::pomodoro::PomodoroState;
use crate::core::screens::qr::QrState;
use crate::core::screens::rpg::RpgState;
use crate::core::screens::todo::TodoState;
use crate::core::screens::unit_converter::UnitConverterState;
use crate::core::screens::wheel::WheelState;
use crate::core::todo_store::TodoStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    QrCode,
    DiceRoller,
    WheelSpinner,
    RpgClassSelect,
    RpgCharacter,
    TodoList,
    Pomodoro,
    Base64,
    SystemInfo,
    NetworkInfo,
    UnitConverter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

pub struct App {
    pub screen: Screen,
    pub viewport: Viewport,
    pub menu: MenuState,
    pub qr: QrState,
    pub dice: DiceState,
    pub wheel: WheelState,
    pub rpg: RpgState,
    pub todo: TodoState,
    pub pomodoro: PomodoroState,
    pub base64: Base64State,
    pub unit_converter: UnitConverterState,
    pub system_info: SystemInfoState,
    pub network_info: NetworkInfoState,
}

impl App {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            screen: Screen::Menu,
            viewport: Viewport::default(),
            menu: MenuState::default(),
            qr: QrState::new(config.qr_image_path.clone()),
            dice: DiceState::default(),
            wheel: WheelState::default(),
            rpg: RpgState::new(config.export_dir.clone()),
            todo: TodoState::open(TodoStore::new(config.todo_file.clone())),
            pomodoro: PomodoroState::new(config.pomodoro),
            base64: Base64State::default(),
            unit_converter: UnitConverterState::default(),
            system_info: SystemInfoState::default(),
            network_info: NetworkInfoState::default(),
        }
    }
}
