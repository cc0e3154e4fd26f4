use std::fmt;

use async_trait::async_trait;

use super::types::{AnalysisResult, HistoryEntry};

/// Errors that can occur talking to the Analysis Service.
///
/// The session controller collapses all of these into the same generic
/// banner (analyze) or an empty panel (history); the variants exist so the
/// log tells network-down apart from a misbehaving server.
#[derive(Debug)]
pub enum ServiceError {
    /// Network-level failure (DNS, connection refused, broken transport).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The request exceeded the configured deadline.
    Timeout,
    /// The response body was not the JSON shape we expect.
    Parse(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Api { status, message } => {
                write!(f, "service error (HTTP {status}): {message}")
            }
            ServiceError::Timeout => write!(f, "request timed out"),
            ServiceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// The remote collaborator that performs mood inference and stores history.
///
/// The HTTP implementation lives in [`super::http`]; tests substitute a
/// canned stub so the controller can be exercised without a network.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Returns the name of the service backend (for logging).
    fn name(&self) -> &str;

    /// Analyze one piece of free text, producing a mood and a suggestion.
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ServiceError>;

    /// Fetch all past analyses, in the order the service defines.
    async fn history(&self) -> Result<Vec<HistoryEntry>, ServiceError>;
}
