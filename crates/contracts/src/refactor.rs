use serde::{Deserialize, Serialize};

/// Default name for the downloaded artifact before the service suggests one.
pub const DEFAULT_OUTPUT_FILENAME: &str = "improved_code.txt";

/// Success body of `POST /refactor`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefactorResponse {
    /// Suggested filename for the improved file ("improved_<original>")
    pub filename: String,

    /// The source exactly as it was uploaded
    pub original_code: String,

    /// The refactored source returned by the model
    pub improved_code: String,
}

/// Error body of `POST /refactor`
///
/// Single `detail` field so the frontend can surface the message verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
