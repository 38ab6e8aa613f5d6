//! Todo list screen. Every mutation is written straight back to the store.

use std::fmt;

use chrono::Utc;
use log::warn;

use crate::core::action::Key;
use crate::core::screens::{Outcome, step_clamped};
use crate::core::services::Services;
use crate::core::state::Screen;
use crate::core::todo_store::{TodoItem, TodoStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn next(self) -> Self {
        match self {
            TodoFilter::All => TodoFilter::Active,
            TodoFilter::Active => TodoFilter::Completed,
            TodoFilter::Completed => TodoFilter::All,
        }
    }

    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !item.completed,
            TodoFilter::Completed => item.completed,
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TodoFilter::All => "all",
            TodoFilter::Active => "active",
            TodoFilter::Completed => "completed",
        })
    }
}

#[derive(Debug, Clone)]
pub struct TodoState {
    pub items: Vec<TodoItem>,
    pub store: TodoStore,
    pub filter: TodoFilter,
    /// Index into [`TodoState::visible`].
    pub cursor: usize,
    pub input_mode: bool,
    pub input: String,
    pub message: String,
}

impl TodoState {
    /// Loads whatever the store holds.
    pub fn open(store: TodoStore) -> Self {
        Self {
            items: store.load(),
            store,
            filter: TodoFilter::All,
            cursor: 0,
            input_mode: false,
            input: String::new(),
            message: String::new(),
        }
    }

    /// Screen-entry reset. Items and filter are kept.
    pub fn reset(&mut self) {
        self.input_mode = false;
        self.input.clear();
        self.cursor = 0;
        self.message.clear();
    }

    /// Items passing the current filter, in insertion order.
    pub fn visible(&self) -> Vec<&TodoItem> {
        self.items.iter().filter(|i| self.filter.matches(i)).collect()
    }

    fn selected_id(&self) -> Option<String> {
        self.visible().get(self.cursor).map(|item| item.id.clone())
    }

    /// Keep the cursor on a visible row after the filtered list shrinks.
    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    fn persist(&mut self, ok: &str, failed: &str) {
        self.message = match self.store.save(&self.items) {
            Ok(()) => format!("✅ {ok}"),
            Err(e) => {
                warn!("Failed to save todos to {}: {}", self.store.path().display(), e);
                format!("❌ {failed}")
            }
        };
    }

    pub fn handle(&mut self, key: Key, services: &mut Services) -> Outcome {
        if self.input_mode {
            self.handle_input(key, services);
            return Outcome::Stay;
        }

        let len = self.visible().len();
        match key {
            Key::Escape => return Outcome::Switch(Screen::Menu),
            Key::Tab => {
                self.input_mode = true;
                self.input.clear();
                self.message.clear();
            }
            Key::Up | Key::Char('k') => self.cursor = step_clamped(self.cursor, len, false),
            Key::Down | Key::Char('j') => self.cursor = step_clamped(self.cursor, len, true),
            Key::Enter => {
                if let Some(id) = self.selected_id() {
                    if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
                        item.completed = !item.completed;
                    }
                    self.persist("Todo updated", "Failed to save changes");
                    self.clamp_cursor();
                }
            }
            Key::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.items.retain(|i| i.id != id);
                    self.persist("Todo deleted", "Failed to delete todo");
                    self.clamp_cursor();
                }
            }
            Key::Char('f') => {
                self.filter = self.filter.next();
                self.cursor = 0;
                self.message = format!("Filter: {}", self.filter);
            }
            _ => {}
        }
        Outcome::Stay
    }

    fn handle_input(&mut self, key: Key, services: &mut Services) {
        match key {
            Key::Escape | Key::Tab => {
                self.input_mode = false;
                self.input.clear();
                self.message.clear();
            }
            Key::Enter => {
                let text = self.input.trim();
                if text.is_empty() {
                    return;
                }
                let created_at = services.clock.local_now().with_timezone(&Utc);
                self.items.push(TodoItem::new(text, created_at));
                self.input.clear();
                self.input_mode = false;
                self.persist("Todo added successfully", "Failed to save todo");
            }
            Key::Backspace => {
                self.input.pop();
            }
            Key::Char(c) => self.input.push(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_services;

    fn open_in(dir: &std::path::Path) -> TodoState {
        TodoState::open(TodoStore::new(dir.join("todos.json")))
    }

    fn add(todo: &mut TodoState, services: &mut Services, text: &str) {
        todo.handle(Key::Tab, services);
        for c in text.chars() {
            todo.handle(Key::Char(c), services);
        }
        todo.handle(Key::Enter, services);
    }

    #[test]
    fn test_add_persists() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut todo = open_in(dir.path());
        add(&mut todo, &mut services, "  buy milk  ");
        assert_eq!(todo.items.len(), 1);
        assert_eq!(todo.items[0].text, "buy milk");
        assert!(todo.message.contains("Todo added successfully"));
        assert!(!todo.input_mode);

        let reopened = open_in(dir.path());
        assert_eq!(reopened.items, todo.items);
    }

    #[test]
    fn test_command_letters_are_text_in_input_mode() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut todo = open_in(dir.path());
        add(&mut todo, &mut services, "jkdf");
        assert_eq!(todo.items[0].text, "jkdf");
        assert_eq!(todo.filter, TodoFilter::All);
    }

    #[test]
    fn test_blank_input_is_not_added() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut todo = open_in(dir.path());
        add(&mut todo, &mut services, "   ");
        assert!(todo.items.is_empty());
        assert!(todo.input_mode);
    }

    #[test]
    fn test_toggle_and_filter_completed() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut todo = open_in(dir.path());
        add(&mut todo, &mut services, "first");
        add(&mut todo, &mut services, "second");

        todo.handle(Key::Down, &mut services);
        todo.handle(Key::Enter, &mut services);
        assert!(todo.items[1].completed);
        assert!(todo.message.contains("Todo updated"));

        todo.handle(Key::Char('f'), &mut services);
        assert_eq!(todo.message, "Filter: active");
        assert_eq!(todo.visible()[0].text, "first");

        todo.handle(Key::Char('f'), &mut services);
        assert_eq!(todo.filter, TodoFilter::Completed);
        let visible: Vec<&str> = todo.visible().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(visible, vec!["second"]);
        assert_eq!(todo.cursor, 0);

        todo.handle(Key::Char('f'), &mut services);
        assert_eq!(todo.filter, TodoFilter::All);
    }

    #[test]
    fn test_delete_clamps_cursor() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut todo = open_in(dir.path());
        add(&mut todo, &mut services, "a");
        add(&mut todo, &mut services, "b");
        todo.handle(Key::Char('j'), &mut services);
        todo.handle(Key::Char('d'), &mut services);
        assert_eq!(todo.items.len(), 1);
        assert_eq!(todo.cursor, 0);
        assert!(todo.message.contains("Todo deleted"));

        todo.handle(Key::Char('d'), &mut services);
        assert!(todo.items.is_empty());
        assert_eq!(todo.cursor, 0);
        // Nothing left to act on
        todo.handle(Key::Enter, &mut services);
        todo.handle(Key::Char('d'), &mut services);
        assert!(todo.visible().is_empty());
    }

    #[test]
    fn test_toggle_out_of_filter_clamps_cursor() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut todo = open_in(dir.path());
        add(&mut todo, &mut services, "a");
        add(&mut todo, &mut services, "b");

        todo.handle(Key::Char('f'), &mut services);
        assert_eq!(todo.filter, TodoFilter::Active);
        todo.handle(Key::Down, &mut services);
        todo.handle(Key::Enter, &mut services);
        assert!(todo.items[1].completed);
        assert_eq!(todo.visible().len(), 1);
        assert_eq!(todo.cursor, 0);

        // The remaining row is still reachable
        todo.handle(Key::Enter, &mut services);
        assert!(todo.items[0].completed);
        assert!(todo.visible().is_empty());
        assert_eq!(todo.cursor, 0);
    }

    #[test]
    fn test_write_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut todo = TodoState::open(TodoStore::new(dir.path().join("missing").join("todos.json")));
        add(&mut todo, &mut services, "doomed");
        assert!(todo.message.contains("Failed to save todo"));
        // Kept in memory regardless
        assert_eq!(todo.items.len(), 1);
    }

    #[test]
    fn test_escape_leaves_input_mode_first() {
        let dir = tempfile::tempdir().unwrap();
        let (mut services, _clock) = test_services();
        let mut todo = open_in(dir.path());
        todo.handle(Key::Tab, &mut services);
        assert_eq!(todo.handle(Key::Escape, &mut services), Outcome::Stay);
        assert!(!todo.input_mode);
        assert_eq!(todo.handle(Key::Escape, &mut services), Outcome::Switch(Screen::Menu));
    }
}
