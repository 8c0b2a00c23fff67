//! Error types for the translation client.

/// Error from a translation request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization error building the request payload.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// The API returned a response with no choices.
    #[error("translation response contained no choices")]
    EmptyResponse,
}
