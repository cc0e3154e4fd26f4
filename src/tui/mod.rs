//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Busy** (analysis in flight): draws every ~80ms so the spinner in
//!   the title bar animates smoothly.
//! - **Idle**: sleeps up to 250ms, only redraws on events, background
//!   completions, or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call, making blinking cursors appear erratic
//! during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::analysis::AnalysisService;
use crate::core::action::{Action, Effect, update};
use crate::core::state::Session;
use crate::tui::component::EventHandler;
use crate::tui::components::{HistoryPanelState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub input_box: InputBox,
    pub history: HistoryPanelState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            history: HistoryPanelState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,   // Wheel scrolling in the history panel
            EnableBracketedPaste, // Multi-line paste into the input box
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(service: Arc<dyn AnalysisService>) -> std::io::Result<()> {
    let mut session = Session::new(service);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Eager history fetch before the first frame
    if update(&mut session, Action::SessionStarted) == Effect::RefreshHistory {
        spawn_history_refresh(session.service.clone(), tx.clone());
    }

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = session.status.is_busy();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                // Esc and Ctrl+C quit, including mid-request
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut session, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }

                // Wheel and page keys drive the history panel
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.history.handle_event(&event);
                }

                // Everything else is editing
                _ => {
                    if let Some(input_event) = tui.input_box.handle_event(&event) {
                        match input_event {
                            InputEvent::ContentChanged => {
                                // Mirror the buffer into the session draft
                                update(
                                    &mut session,
                                    Action::DraftEdited(tui.input_box.buffer.clone()),
                                );
                            }
                            InputEvent::Submitted => {
                                let effect = update(&mut session, Action::SubmitRequested);
                                if let Effect::Analyze(text) = effect {
                                    spawn_analyze(session.service.clone(), text, tx.clone());
                                }
                            }
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task completions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut session, action) {
                Effect::RefreshHistory => {
                    spawn_history_refresh(session.service.clone(), tx.clone());
                }
                Effect::Quit => should_quit = true,
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_analyze(service: Arc<dyn AnalysisService>, text: String, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning analyze request ({} bytes) via {}",
        text.len(),
        service.name()
    );
    tokio::spawn(async move {
        let result = service.analyze(&text).await;
        if tx.send(Action::AnalyzeCompleted(result)).is_err() {
            warn!("Failed to deliver analyze result: receiver dropped");
        }
    });
}

fn spawn_history_refresh(service: Arc<dyn AnalysisService>, tx: mpsc::Sender<Action>) {
    info!("Spawning history refresh via {}", service.name());
    tokio::spawn(async move {
        let result = service.history().await;
        if tx.send(Action::HistoryLoaded(result)).is_err() {
            warn!("Failed to deliver history: receiver dropped");
        }
    });
}
