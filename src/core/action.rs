//! # Actions
//!
//! Everything that can happen in MoodLens becomes an `Action`.
//! User presses Enter? That's `Action::SubmitRequested`.
//! The backend answers? That's `Action::AnalyzeCompleted(result)`.
//!
//! The `update()` function takes the current session and an action and
//! mutates the session, returning an `Effect` — the one piece of I/O the
//! event loop must perform next. No I/O happens here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! This makes the whole submit/refresh dance testable without a terminal
//! or a network: feed actions, assert on state and effects.

use log::{debug, warn};

use crate::analysis::{AnalysisResult, HistoryEntry, ServiceError};
use crate::core::state::{ANALYZE_FAILURE_BANNER, Session, SessionStatus};

/// Everything that can happen in the app.
#[derive(Debug)]
pub enum Action {
    /// First tick after startup; kicks off the eager history fetch.
    SessionStarted,
    /// The input box content changed; the session mirrors the new text.
    DraftEdited(String),
    /// The user asked to analyze the current draft.
    SubmitRequested,
    /// A background analyze task finished.
    AnalyzeCompleted(Result<AnalysisResult, ServiceError>),
    /// A background history fetch finished.
    HistoryLoaded(Result<Vec<HistoryEntry>, ServiceError>),
    /// The user asked to leave.
    Quit,
}

/// I/O the event loop owes after an `update()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn an analyze request carrying this text (the raw draft,
    /// untrimmed — only the emptiness guard trims).
    Analyze(String),
    /// Spawn a history refresh. Its failure never reaches the banner.
    RefreshHistory,
    /// Tear down the terminal and exit.
    Quit,
}

/// Apply one action to the session. The only place session state changes.
pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::SessionStarted => Effect::RefreshHistory,

        Action::DraftEdited(text) => {
            session.draft = text;
            Effect::None
        }

        Action::SubmitRequested => submit(session),

        Action::AnalyzeCompleted(Ok(result)) => {
            debug!("Analyze succeeded: mood={}", result.mood);
            session.result = Some(result);
            session.draft.clear();
            session.status = SessionStatus::Idle;
            // The result is committed before this effect is executed, so
            // anyone sampling state after the submit settles sees a
            // consistent result+history pair.
            Effect::RefreshHistory
        }

        Action::AnalyzeCompleted(Err(e)) => {
            warn!("Analyze failed: {e}");
            // Draft and previous result are deliberately left alone.
            session.status = SessionStatus::Error(ANALYZE_FAILURE_BANNER.to_string());
            Effect::None
        }

        Action::HistoryLoaded(Ok(entries)) => {
            debug!("History replaced: {} entries", entries.len());
            session.history = entries;
            Effect::None
        }

        Action::HistoryLoaded(Err(e)) => {
            // The panel goes empty, no banner. The log is the only trace.
            warn!("History fetch failed, panel cleared: {e}");
            session.history.clear();
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

fn submit(session: &mut Session) -> Effect {
    // Sole input validation: a draft that trims to nothing is not sent.
    if session.draft.trim().is_empty() {
        return Effect::None;
    }

    // Re-entrancy guard: one analyze in flight at a time. A second Enter
    // while busy is dropped, not queued.
    if session.status.is_busy() {
        debug!("Submit ignored: analyze already in flight");
        return Effect::None;
    }

    session.status = SessionStatus::Busy;
    Effect::Analyze(session.draft.clone())
}
