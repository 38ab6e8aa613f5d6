//! RPG character creator: class selection, then a rolled character sheet
//! with export to text or HTML.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::core::action::Key;
use crate::core::scheduler::{AnimationTimer, TimerId};
use crate::core::screens::{Outcome, step_clamped};
use crate::core::services::Services;
use crate::core::state::Screen;
use crate::tools::character::{Character, Class, SheetFormat, export_sheet};

pub const ROLL_DURATION: Duration = Duration::from_secs(2);
pub const ROLL_CADENCE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default)]
pub struct RpgState {
    pub class_cursor: usize,
    pub selected_class: Option<Class>,
    pub character: Option<Character>,
    pub timer: AnimationTimer,
    pub export_status: String,
    pub export_dir: PathBuf,
}

impl RpgState {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            ..Default::default()
        }
    }

    /// Entry reset for class selection.
    pub fn reset_class_select(&mut self) {
        self.class_cursor = 0;
        if self.timer.is_running() {
            self.timer.stop();
        }
    }

    /// Entry into the character sheet: take the highlighted class and roll.
    pub fn enter_character(&mut self, services: &mut Services) {
        if self.timer.is_running() {
            self.timer.stop();
        }
        self.selected_class = Class::ALL.get(self.class_cursor).copied();
        self.reroll(services);
    }

    pub fn is_rolling(&self) -> bool {
        self.timer.is_running()
    }

    fn reroll(&mut self, services: &mut Services) {
        self.character = Some(Character::roll(self.selected_class, services.rng.as_mut()));
        self.export_status.clear();
    }

    pub fn handle_class_select(&mut self, key: Key) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Up | Key::Char('k') => {
                self.class_cursor = step_clamped(self.class_cursor, Class::ALL.len(), false)
            }
            Key::Down | Key::Char('j') => {
                self.class_cursor = step_clamped(self.class_cursor, Class::ALL.len(), true)
            }
            Key::Enter | Key::Char(' ') => return Outcome::Enter(Screen::RpgCharacter),
            _ => {}
        }
        Outcome::Stay
    }

    pub fn handle_character(&mut self, key: Key, services: &mut Services) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Char('b') => return Outcome::Switch(Screen::RpgClassSelect),
            Key::Enter | Key::Char(' ') if !self.is_rolling() => {
                self.reroll(services);
                self.timer.start(services.clock.now());
                return Outcome::Schedule(self.timer.request(TimerId::Rpg, ROLL_CADENCE));
            }
            Key::Char('r') if !self.is_rolling() => self.reroll(services),
            Key::Char('s') => self.export(SheetFormat::Text, services),
            Key::Char('p') => self.export(SheetFormat::Html, services),
            _ => {}
        }
        Outcome::Stay
    }

    fn export(&mut self, format: SheetFormat, services: &Services) {
        let Some(character) = &self.character else {
            return;
        };
        match export_sheet(character, format, &self.export_dir, services.clock.local_now()) {
            Ok(path) => {
                info!("Character sheet exported to {}", path.display());
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.export_status = match format {
                    SheetFormat::Text => format!("✅ Character saved to {name}"),
                    SheetFormat::Html => {
                        format!("✅ Character saved to {name} (open in browser to print as PDF)")
                    }
                };
            }
            Err(e) => {
                warn!("Character export failed: {}", e);
                self.export_status = match format {
                    SheetFormat::Text => format!("❌ Export failed: {e}"),
                    SheetFormat::Html => format!("❌ PDF export failed: {e}"),
                };
            }
        }
    }

    pub fn on_tick(&mut self, generation: u64, now: Instant) -> Outcome {
        if !self.timer.is_current(generation) {
            return Outcome::Stay;
        }
        if self.timer.elapsed(now) >= ROLL_DURATION {
            self.timer.stop();
            return Outcome::Stay;
        }
        Outcome::Schedule(self.timer.request(TimerId::Rpg, ROLL_CADENCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_services;

    #[test]
    fn test_class_select_picks_highlighted_class() {
        let (mut services, _clock) = test_services();
        let mut rpg = RpgState::default();
        rpg.handle_class_select(Key::Down);
        rpg.handle_class_select(Key::Char('j'));
        assert_eq!(
            rpg.handle_class_select(Key::Enter),
            Outcome::Enter(Screen::RpgCharacter)
        );
        rpg.enter_character(&mut services);
        assert_eq!(rpg.selected_class, Some(Class::Wizard));
        let character = rpg.character.as_ref().unwrap();
        assert_eq!(character.class, Some(Class::Wizard));
        assert!(character.gear.items.contains(&"Spellbook".to_string()));
    }

    #[test]
    fn test_reroll_animation() {
        let (mut services, clock) = test_services();
        let mut rpg = RpgState::default();
        rpg.enter_character(&mut services);
        let Outcome::Schedule(req) = rpg.handle_character(Key::Enter, &mut services) else {
            panic!("reroll should schedule");
        };
        assert!(rpg.is_rolling());

        // Instant reroll is ignored while rolling
        let before = rpg.character.clone();
        rpg.handle_character(Key::Char('r'), &mut services);
        assert_eq!(rpg.character, before);

        clock.advance(ROLL_DURATION);
        assert_eq!(rpg.on_tick(req.generation, clock.now()), Outcome::Stay);
        assert!(!rpg.is_rolling());
    }

    #[test]
    fn test_back_keeps_character() {
        let (mut services, _clock) = test_services();
        let mut rpg = RpgState::default();
        rpg.enter_character(&mut services);
        assert_eq!(
            rpg.handle_character(Key::Char('b'), &mut services),
            Outcome::Switch(Screen::RpgClassSelect)
        );
        assert!(rpg.character.is_some());
    }

    #[test]
    fn test_export_text_and_html() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut rpg = RpgState::new(dir.path().to_path_buf());
        rpg.enter_character(&mut services);

        rpg.handle_character(Key::Char('s'), &mut services);
        assert!(rpg.export_status.starts_with("✅ Character saved to Barbarian_Character_"));
        assert!(rpg.export_status.ends_with(".txt"));

        rpg.handle_character(Key::Char('p'), &mut services);
        assert!(rpg.export_status.contains(".html"));

        let written = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(written, 2);
    }

    #[test]
    fn test_export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let (mut services, _clock) = test_services();
        let mut rpg = RpgState::new(blocker);
        rpg.enter_character(&mut services);
        rpg.handle_character(Key::Char('s'), &mut services);
        assert!(rpg.export_status.starts_with("❌ Export failed"));

        rpg.handle_character(Key::Char('p'), &mut services);
        assert!(rpg.export_status.starts_with("❌ PDF export failed"));
    }

    #[test]
    fn test_class_select_reset_stops_roll() {
        let (mut services, _clock) = test_services();
        let mut rpg = RpgState::default();
        rpg.class_cursor = 3;
        rpg.enter_character(&mut services);
        rpg.handle_character(Key::Enter, &mut services);
        rpg.reset_class_select();
        assert_eq!(rpg.class_cursor, 0);
        assert!(!rpg.is_rolling());
    }
}
