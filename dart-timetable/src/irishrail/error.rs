//! Irish Rail client error types.

/// Errors from the Irish Rail HTTP client.
///
/// Callers of the collapsing operations (`get_stations`, `get_timetable`)
/// never see these; they are logged and turned into an empty result.
#[derive(Debug, thiserror::Error)]
pub enum RailError {
    /// HTTP request failed (connection, timeout, cancellation)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}")]
    Api { status: u16 },

    /// API returned an empty or whitespace-only body
    #[error("empty response body")]
    EmptyBody,

    /// Payload was not the XML document we expected
    #[error("XML parse error: {message}")]
    Xml { message: String },
}
