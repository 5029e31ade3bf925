// src/github/mod.rs
// =============================================================================
// This module handles talking to GitHub.
//
// Implements:
// - Parsing repository URLs to extract owner/repo
// - Asking the GitHub REST API for a repository's reported size
//
// Future enhancements (stretch goals):
// - Authentication for private repos and higher rate limits
// - Querying several repositories in one invocation
// =============================================================================

mod repo;

// Re-export the public API so callers write `github::fetch_repo_size()`
// instead of `github::repo::fetch_repo_size()`
pub use repo::{fetch_repo_size, parse_repo_url};
