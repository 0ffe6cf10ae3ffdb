//! Error types for xkcd-wikitext.

use thiserror::Error;

/// Result type for xkcd-wikitext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching or extracting an explanation.
///
/// Wikitext conversion itself never fails; these only come from the
/// explanation side.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be sent or its body could not be read.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The wiki answered with a non-success status.
    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// The API payload was not the expected JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The page is missing or has no content.
    #[error("No explanation page content")]
    ExplanationNotFound,

    /// Neither an `{{incomplete|` marker nor an Explanation heading was found.
    #[error("Explanation section start not found")]
    SectionNotFound,

    /// The configured wiki base URL could not be joined with the API path.
    #[error("Invalid wiki URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
