//! System and network information screens.

use chrono::{DateTime, Local};

use crate::core::action::Key;
use crate::core::screens::Outcome;
use crate::core::services::Services;
use crate::core::state::Screen;
use crate::tools::host::{NetworkInterface, SystemInfo};

#[derive(Debug, Clone, Default)]
pub struct SystemInfoState {
    pub info: SystemInfo,
    pub message: String,
    pub last_update: Option<DateTime<Local>>,
}

impl SystemInfoState {
    /// Screen-entry reset: take a fresh snapshot.
    pub fn load(&mut self, services: &mut Services) {
        self.snapshot(services);
        self.message = "System information loaded".to_string();
    }

    fn snapshot(&mut self, services: &mut Services) {
        self.info = services.probe.system_info();
        self.last_update = Some(services.clock.local_now());
    }

    pub fn handle(&mut self, key: Key, services: &mut Services) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Char('r') => {
                self.snapshot(services);
                self.message = "System information refreshed".to_string();
            }
            _ => {}
        }
        Outcome::Stay
    }
}

#[derive(Debug, Clone, Default)]
pub struct NetworkInfoState {
    pub interfaces: Vec<NetworkInterface>,
    pub message: String,
    pub last_update: Option<DateTime<Local>>,
}

impl NetworkInfoState {
    pub fn load(&mut self, services: &mut Services) {
        self.snapshot(services);
        self.message = "Network information loaded".to_string();
    }

    fn snapshot(&mut self, services: &mut Services) {
        self.interfaces = services.probe.network_interfaces();
        self.last_update = Some(services.clock.local_now());
    }

    pub fn handle(&mut self, key: Key, services: &mut Services) -> Outcome {
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Char('r') => {
                self.snapshot(services);
                self.message = "Network information refreshed".to_string();
            }
            _ => {}
        }
        Outcome::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_services;

    #[test]
    fn test_system_snapshot() {
        let (mut services, _clock) = test_services();
        let mut state = SystemInfoState::default();
        state.load(&mut services);
        assert_eq!(state.info.hostname, "testhost");
        assert_eq!(state.message, "System information loaded");
        assert!(state.last_update.is_some());

        state.handle(Key::Char('r'), &mut services);
        assert_eq!(state.message, "System information refreshed");
    }

    #[test]
    fn test_network_snapshot() {
        let (mut services, _clock) = test_services();
        let mut state = NetworkInfoState::default();
        state.load(&mut services);
        assert_eq!(state.interfaces.len(), 2);
        assert!(state.interfaces[0].is_loopback);
        assert_eq!(state.handle(Key::Escape, &mut services), Outcome::Switch(Screen::Menu));
    }
}
