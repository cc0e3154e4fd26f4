//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::analysis::{AnalysisResult, AnalysisService, HistoryEntry, ServiceError};

/// A canned service for tests that don't need real HTTP calls.
pub struct StubService;

#[async_trait]
impl AnalysisService for StubService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn analyze(&self, _text: &str) -> Result<AnalysisResult, ServiceError> {
        Ok(AnalysisResult {
            mood: "Neutral 😐".to_string(),
            suggestion: "Keep checking in with yourself".to_string(),
        })
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ServiceError> {
        Ok(Vec::new())
    }
}

/// Creates a test Session with a StubService.
pub fn test_session() -> crate::core::state::Session {
    crate::core::state::Session::new(Arc::new(StubService))
}
