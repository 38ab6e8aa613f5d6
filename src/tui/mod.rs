//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One task, one loop. Each turn waits on whichever comes first:
//!
//! - the next terminal event from crossterm's `EventStream`, or
//! - the earliest armed animation deadline in the [`Scheduler`].
//!
//! The winner is turned into actions, each action runs through
//! `core::action::update` to completion, effects are applied (arm a timer
//! or quit), and the frame is redrawn. Nothing runs concurrently with an
//! update, so screen state never needs locking.
//!
//! With no timer armed the loop sleeps until the next key press.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::time::Instant;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use futures::StreamExt;
use log::{debug, info, warn};
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::scheduler::Scheduler;
use crate::core::services::Services;
use crate::core::state::{App, Viewport};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes let a lone Esc arrive without the usual
        // delay; terminals without the protocol ignore the request
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// Sleeps until `deadline`, or forever when nothing is armed.
async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Run the toolbox until the user quits. Only failing to set up the
/// terminal is an error; everything after that is reported on screen.
pub async fn run(mut app: App, mut services: Services) -> std::io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable extra terminal modes: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut services).await;

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Terminal restored");
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    services: &mut Services,
) -> std::io::Result<()> {
    let size = terminal.size()?;
    app.viewport = Viewport {
        width: size.width,
        height: size.height,
    };

    let mut events = EventStream::new();
    let mut scheduler = Scheduler::new();

    loop {
        terminal.draw(|f| ui::draw_ui(f, app, services.clock.now()))?;

        let actions: Vec<Action> = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(terminal_event)) => event::map_event(terminal_event).into_iter().collect(),
                Some(Err(e)) => {
                    warn!("Terminal event error: {}", e);
                    Vec::new()
                }
                None => {
                    info!("Terminal event stream closed");
                    return Ok(());
                }
            },
            _ = wait_for(scheduler.next_deadline()) => scheduler.take_due(services.clock.now()),
        };

        for action in actions {
            debug!("Event loop dispatching {:?}", action);
            match update(app, action, services) {
                Effect::None => {}
                Effect::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Effect::Schedule(request) => scheduler.arm(request, services.clock.now()),
            }
        }
    }
}
