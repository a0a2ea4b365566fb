use reqwest::StatusCode;
use thiserror::Error;

/// An error type for the scraper
///
/// Every variant ends the run. None of them is retried or skipped; the
/// distinction only exists so the final log line says what went wrong.
#[derive(Debug, Error)]
pub enum ScrapeError {

    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be written to disk.
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),

    /// The source page is missing the form or one of the expected selects.
    #[error("unexpected source page: {0}")]
    Page(String),

    /// The server answered with a non-success status. Only produced when
    /// status checking is switched on; otherwise the body is saved as is.
    #[error("{url} answered {status}")]
    Status { status: StatusCode, url: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
