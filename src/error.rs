//! Error types for wordswap operations.

use thiserror::Error;

/// Errors that can occur while fetching a page for rewriting.
///
/// The rewrite core itself never fails: parsing is permissive and repairs
/// malformed input, and "no match found" is the expected common case.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("upstream returned status {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
