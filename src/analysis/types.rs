use serde::{Deserialize, Serialize};

/// Request body for `POST /analyze`.
///
/// The text is sent exactly as typed — trimming only gates the submit on
/// the client side, it never alters what the service receives.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// One completed analysis as returned by `POST /analyze`.
///
/// The service echoes additional fields (`text`, `time`) alongside these;
/// serde ignores anything not listed here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub mood: String,
    pub suggestion: String,
}

/// One past analysis as returned by `GET /history`.
///
/// `time` is a preformatted display string (e.g. "14:05") — the service
/// owns the clock and the format; the client renders it verbatim.
/// History entries also carry `text` and `suggestion` on the wire, which
/// the history panel never shows, so they are not deserialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub mood: String,
    pub time: String,
}
