pub mod http;
pub mod service;
pub mod types;

pub use http::HttpAnalysisService;
pub use service::{AnalysisService, ServiceError};
pub use types::{AnalysisResult, AnalyzeRequest, HistoryEntry};
