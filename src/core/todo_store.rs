//! # Todo Persistence
//!
//! The todo list lives in a single JSON array (default
//! `~/.big-dumb-toolbox-todos.json`). It is read once at startup and
//! rewritten in full after every mutation.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn new(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_todo_id(),
            text: text.into(),
            completed: false,
            created_at,
        }
    }
}

/// Generate a new UUID v4 todo ID.
pub fn new_todo_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all todos. A missing or unreadable file yields an empty list.
    pub fn load(&self) -> Vec<TodoItem> {
        match self.try_load() {
            Ok(items) => {
                debug!("Loaded {} todos from {}", items.len(), self.path.display());
                items
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("Ignoring todo file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> io::Result<Vec<TodoItem>> {
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self, items: &[TodoItem]) -> io::Result<()> {
        atomic_write_json(&self.path, &items)?;
        debug!("Saved {} todos to {}", items.len(), self.path.display());
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Write the store's contents to a scratch file beside it, read them back,
/// compare, and remove the scratch file. Returns the number of items checked.
pub fn self_test(store: &TodoStore) -> io::Result<usize> {
    let items = store.load();
    let mut scratch_path = store.path().as_os_str().to_owned();
    scratch_path.push(".selftest.json");
    let scratch = TodoStore::new(PathBuf::from(scratch_path));

    let result = scratch.save(&items).and_then(|_| scratch.try_load());
    let cleanup = fs::remove_file(scratch.path());

    let reloaded = result?;
    cleanup?;
    if reloaded != items {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "todo round trip produced different data",
        ));
    }
    Ok(items.len())
}
