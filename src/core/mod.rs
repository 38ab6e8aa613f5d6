//! # Core Application Logic
//!
//! This module contains the toolbox's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Screen controllers   │
//!                    │                         │
//!                    │  No terminal. No async. │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, every screen's state in one place
//! - [`action`]: `Key`, `Action`, `Effect` and the `update()` shell
//! - [`screens`]: one controller per screen
//! - [`scheduler`]: animation timers and pending deadlines
//! - [`services`]: clock, randomness, host probe, clipboard
//! - [`config`]: `~/.toolbox/config.toml` loading and resolution
//! - [`todo_store`]: todo list persistence

pub mod action;
pub mod config;
pub mod scheduler;
pub mod screens;
pub mod services;
pub mod state;
pub mod todo_store;
