//! # Session State
//!
//! All mutable client state in one place. This module contains domain
//! state only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! Session
//! ├── service: Arc<dyn AnalysisService>  // remote mood backend
//! ├── draft: String                      // text being composed
//! ├── result: Option<AnalysisResult>     // latest analysis, if any
//! ├── history: Vec<HistoryEntry>         // as last returned by the service
//! └── status: SessionStatus              // Idle | Busy | Error(banner)
//! ```
//!
//! State changes only happen through `update(session, action)` in
//! action.rs. The view reads this struct and never writes it.

use std::sync::Arc;

use crate::analysis::{AnalysisResult, AnalysisService, HistoryEntry};

/// Banner text shown when an analyze request fails. Deliberately generic:
/// the user sees the same line whether the backend is down, erroring, or
/// talking nonsense. The log carries the real cause.
pub const ANALYZE_FAILURE_BANNER: &str = "⚠️ Backend not running";

/// Where the session stands relative to an analyze request.
///
/// `Busy` holds for exactly the span of an in-flight analyze and nothing
/// else — history refreshes never touch it. `Error` is a non-busy state:
/// submitting is permitted again, and doing so replaces the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Busy,
    Error(String),
}

impl SessionStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionStatus::Busy)
    }

    /// The banner text, when the last analyze failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SessionStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

pub struct Session {
    pub service: Arc<dyn AnalysisService>,
    /// Owned by the controller; the input box mirrors it. Cleared only by
    /// a successful analyze.
    pub draft: String,
    /// Most recent analysis. Survives later failures — a failed submit
    /// never blanks an already-displayed result.
    pub result: Option<AnalysisResult>,
    /// Replaced wholesale on every history fetch; order is whatever the
    /// service returned.
    pub history: Vec<HistoryEntry>,
    pub status: SessionStatus,
}

impl Session {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self {
            service,
            draft: String::new(),
            result: None,
            history: Vec::new(),
            status: SessionStatus::Idle,
        }
    }
}
