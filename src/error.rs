// src/error.rs
// =============================================================================
// This module defines every way the tool can fail.
//
// We use the `thiserror` crate to derive the Display and Error traits for
// one enum, so each failure mode carries its own message and (where one
// exists) the underlying cause. main.rs just prints whatever Display says.
//
// The taxonomy is flat on purpose: every error is terminal, nothing is
// retried, and the process exits with code 1 either way.
// =============================================================================

use thiserror::Error;

// One variant per failure mode along the pipeline, in pipeline order
#[derive(Debug, Error)]
pub enum SizeError {
    /// The argument could not be parsed as a URL at all
    ///
    /// #[from] lets the ? operator convert url::ParseError automatically
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed, but its path has fewer than two segments
    /// (we need both an owner and a repository name)
    #[error("invalid GitHub repo URL format")]
    InvalidRepoFormat,

    /// The request never completed: DNS failure, connection refused,
    /// TLS problems, or the body stream broke mid-read
    #[error(transparent)]
    Network(reqwest::Error),

    /// The API answered with something other than 200 OK
    /// (404 for an unknown repo, 403 when rate-limited, and so on)
    #[error("GitHub API returned status code {0}")]
    HttpStatus(u16),

    /// We got a 200 response but the body was not the JSON we expected
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}
