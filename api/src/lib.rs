//! Wire contract for the report backend's `POST /upload` endpoint.
//!
//! The backend takes one multipart field holding the CSV bytes and answers
//! with either `{ "error": "..." }` or `{ "results": {...}, "chart": "..." }`
//! where `chart` is itself a JSON-encoded `{data, layout}` document.
//!
//! This crate only knows the shape of that exchange. Rendering and UI state
//! live in the `ui` crate.

mod protocol;
pub use protocol::{ChartPayload, ReportResults, UploadResponse};

mod transport;
pub use transport::ReportTransport;

#[cfg(target_arch = "wasm32")]
pub use transport::HttpTransport;

/// Default endpoint path the browser posts to (same origin).
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field name the backend reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// Errors surfaced by the upload exchange.
///
/// Backend-reported errors are *not* in here: they are a successful round
/// trip and come back as [`UploadResponse::Failed`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("response body is not a report: {0}")]
    InvalidBody(String),
    #[error("chart payload could not be decoded: {0}")]
    Chart(String),
}
