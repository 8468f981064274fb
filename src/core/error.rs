use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IexError {
    /// A builder operation received an argument it cannot represent
    /// (no symbols, a `news` count outside `1..=50`, an unknown name, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A range value was neither a recognized named range nor an 8-digit `YYYYMMDD` date.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided or assembled URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body could not be decoded as the requested JSON type.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
