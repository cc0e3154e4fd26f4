use std::sync::Arc;
use std::time::Duration;

use moodlens::analysis::{AnalysisService, HistoryEntry, HttpAnalysisService};
use moodlens::core::action::{Action, Effect, update};
use moodlens::core::state::{ANALYZE_FAILURE_BANNER, Session, SessionStatus};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// Session wired to a mock backend.
fn session_for(server: &MockServer) -> Session {
    let service = HttpAnalysisService::new(server.uri(), Duration::from_secs(10));
    Session::new(Arc::new(service))
}

/// Runs effects to completion the way the event loop would, but inline,
/// so each test observes a single deterministic request sequence.
async fn settle(session: &mut Session, mut effect: Effect) {
    loop {
        match effect {
            Effect::Analyze(text) => {
                let service = Arc::clone(&session.service);
                let result = service.analyze(&text).await;
                effect = update(session, Action::AnalyzeCompleted(result));
            }
            Effect::RefreshHistory => {
                let service = Arc::clone(&session.service);
                let result = service.history().await;
                effect = update(session, Action::HistoryLoaded(result));
            }
            _ => break,
        }
    }
}

fn analyze_response() -> serde_json::Value {
    serde_json::json!({
        "text": "  I feel great  ",
        "mood": "Happy 😊",
        "suggestion": "Keep doing what makes you feel good",
        "time": "2025-08-25 10:00"
    })
}

fn history_response() -> serde_json::Value {
    serde_json::json!([
        {"text": "rough day", "mood": "Sad 😔", "suggestion": "Be kind to yourself", "time": "10:00"},
        {"text": "quiet morning", "mood": "Calm 😌", "suggestion": "Savor it", "time": "09:00"}
    ])
}

// ============================================================================
// Startup Tests
// ============================================================================

#[tokio::test]
async fn test_startup_fetches_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);

    let effect = update(&mut session, Action::SessionStarted);
    assert_eq!(effect, Effect::RefreshHistory);

    settle(&mut session, effect).await;

    assert_eq!(session.history.len(), 2);
    assert_eq!(session.history[0].mood, "Sad 😔");
    assert_eq!(session.status, SessionStatus::Idle);
}

// ============================================================================
// Submit Flow Tests
// ============================================================================

#[tokio::test]
async fn test_submit_success_commits_then_refreshes() {
    let mock_server = MockServer::start().await;

    // The analyze request must carry the draft exactly as typed,
    // surrounding whitespace included
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(serde_json::json!({"text": "  I feel great  "})))
        .respond_with(ResponseTemplate::new(200).set_body_json(analyze_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    update(&mut session, Action::DraftEdited("  I feel great  ".to_string()));

    let effect = update(&mut session, Action::SubmitRequested);
    assert_eq!(session.status, SessionStatus::Busy);
    assert!(matches!(effect, Effect::Analyze(_)));

    settle(&mut session, effect).await;

    let result = session.result.as_ref().unwrap();
    assert_eq!(result.mood, "Happy 😊");
    assert!(session.draft.is_empty());
    assert_eq!(session.status, SessionStatus::Idle);
    assert_eq!(session.history.len(), 2);
}

#[tokio::test]
async fn test_second_submit_while_busy_sends_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analyze_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    update(&mut session, Action::DraftEdited("hello".to_string()));

    let first = update(&mut session, Action::SubmitRequested);
    assert!(matches!(first, Effect::Analyze(_)));

    // A second Enter before the first request lands is dropped
    let second = update(&mut session, Action::SubmitRequested);
    assert_eq!(second, Effect::None);

    settle(&mut session, first).await;
    assert_eq!(session.status, SessionStatus::Idle);
}

#[tokio::test]
async fn test_analyze_failure_shows_banner_and_skips_refresh() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // A failed analyze must not trigger a history fetch
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    update(&mut session, Action::DraftEdited("feeling rough".to_string()));

    let effect = update(&mut session, Action::SubmitRequested);
    settle(&mut session, effect).await;

    assert_eq!(
        session.status,
        SessionStatus::Error(ANALYZE_FAILURE_BANNER.to_string())
    );
    assert_eq!(session.draft, "feeling rough");
    assert!(session.result.is_none());
}

// ============================================================================
// History Refresh Tests
// ============================================================================

#[tokio::test]
async fn test_history_failure_resets_panel_silently() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);
    session.history = vec![HistoryEntry {
        mood: "Calm 😌".to_string(),
        time: "09:00".to_string(),
    }];

    settle(&mut session, Effect::RefreshHistory).await;

    // Stale rows are dropped rather than shown; no banner for this path
    assert!(session.history.is_empty());
    assert_eq!(session.status, SessionStatus::Idle);
}

#[tokio::test]
async fn test_repeated_refresh_is_idempotent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_response()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut session = session_for(&mock_server);

    let effect = update(&mut session, Action::SessionStarted);
    settle(&mut session, effect).await;
    let first = session.history.clone();

    settle(&mut session, Effect::RefreshHistory).await;

    assert_eq!(session.history, first);
    assert_eq!(session.history.len(), 2);
}
