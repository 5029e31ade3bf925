// src/github/repo.rs
// =============================================================================
// This module turns a repository URL into a size in kilobytes.
//
// Strategy:
// - Parse the URL and take the first two path segments as owner/repo
// - GET https://api.github.com/repos/{owner}/{repo}
// - Decode the `size` field from the JSON response (GitHub reports it in KB)
//
// Why the API instead of cloning?
// - Cloning downloads the whole repository just to measure it
// - The API already knows the size and answers in one round trip
// - No authentication needed for public repos (rate limits apply)
// =============================================================================

use crate::error::SizeError;
use reqwest::{header::USER_AGENT, Client, StatusCode};
use serde::Deserialize;
use url::Url;

/// Where the real GitHub API lives. Tests swap this for a local mock server.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// The fixed identifying header GitHub requires on every API request
const USER_AGENT_VALUE: &str = "repo-size";

// The one piece of the API response we care about
//
// The /repos endpoint returns dozens of fields; serde simply ignores the
// ones we don't declare. #[serde(default)] means a missing `size` field
// decodes as 0 instead of failing.
#[derive(Debug, Deserialize)]
struct RepoInfo {
    /// Repository size in kilobytes, as reported by GitHub
    #[serde(default)]
    size: u64,
}

// Parses a repository URL to extract owner and repository name
//
// Supported shapes (anything with at least two path segments):
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo/
//   - https://github.com/owner/repo/tree/main/src
//
// We deliberately do NOT validate the host: the two path segments are all
// we need, and rejecting mirrors would buy us nothing.
//
// Example:
//   "https://github.com/torvalds/linux" -> ("torvalds", "linux")
pub fn parse_repo_url(repo_url: &str) -> Result<(String, String), SizeError> {
    // Url::parse rejects structurally malformed input; the ? operator
    // converts url::ParseError into SizeError::InvalidUrl via #[from]
    let parsed = Url::parse(repo_url)?;

    // Trim leading/trailing slashes, split on '/', drop empty segments
    // (a double slash in the path would otherwise produce an empty one)
    let segments: Vec<&str> = parsed
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() < 2 {
        return Err(SizeError::InvalidRepoFormat);
    }

    // First segment is the owner, second is the repo; anything after
    // (branch paths, file paths) is ignored
    Ok((segments[0].to_string(), segments[1].to_string()))
}

// Fetches the reported size (in KB) of a repository from the GitHub API
//
// Parameters:
//   owner: the account that owns the repository (e.g., "torvalds")
//   repo: the repository name (e.g., "linux")
//
// Makes exactly one GET request; no retries, no caching.
pub async fn fetch_repo_size(owner: &str, repo: &str) -> Result<u64, SizeError> {
    fetch_repo_size_from(GITHUB_API_BASE, owner, repo).await
}

// The actual request logic, parameterized over the API base URL so tests
// can point it at a mockito server instead of the real GitHub
async fn fetch_repo_size_from(
    api_base: &str,
    owner: &str,
    repo: &str,
) -> Result<u64, SizeError> {
    let api_url = format!("{}/repos/{}/{}", api_base, owner, repo);

    // Default client settings: default timeout, default TLS, no redirects
    // policy changes needed for this endpoint
    let client = Client::new();

    let response = client
        .get(&api_url)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .send()
        .await
        .map_err(SizeError::Network)?;

    // Anything other than 200 is an error; we don't inspect the body in
    // that case (GitHub's error JSON is not part of our contract)
    let status = response.status();
    if status != StatusCode::OK {
        return Err(SizeError::HttpStatus(status.as_u16()));
    }

    // Read the body to completion first, then decode. Consuming the
    // response here releases the connection whether or not decoding
    // succeeds, and lets us tell a broken stream (Network) apart from
    // malformed JSON (Decode).
    let body = response.text().await.map_err(SizeError::Network)?;
    let info: RepoInfo = serde_json::from_str(&body).map_err(SizeError::Decode)?;

    Ok(info.size)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[serde(default)] do?
//    - If the field is missing from the JSON, use Default::default()
//    - For u64 that's 0, which is exactly what we want for "no size reported"
//    - Without it, a missing field would be a deserialization error
//
// 2. Why map_err instead of ??
//    - ? needs a From impl to convert the error type automatically
//    - reqwest::Error can become either Network or (indirectly) a decode
//      failure, so an automatic conversion would be ambiguous
//    - map_err lets us pick the right variant at each call site
//
// 3. Why read text() before from_str?
//    - response.json::<T>() would work too, but folds transport errors and
//      parse errors into one reqwest::Error
//    - Splitting the steps keeps our error taxonomy honest
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_parse_repo_url() {
        let (owner, repo) = parse_repo_url("https://github.com/torvalds/linux").unwrap();
        assert_eq!(owner, "torvalds");
        assert_eq!(repo, "linux");
    }

    #[test]
    fn test_parse_repo_url_trailing_slash() {
        let (owner, repo) = parse_repo_url("https://github.com/rust-lang/rust/").unwrap();
        assert_eq!(owner, "rust-lang");
        assert_eq!(repo, "rust");
    }

    #[test]
    fn test_parse_repo_url_extra_segments() {
        // Branch and file paths after owner/repo are ignored
        let (owner, repo) =
            parse_repo_url("https://github.com/rust-lang/rust/tree/master/src").unwrap();
        assert_eq!(owner, "rust-lang");
        assert_eq!(repo, "rust");
    }

    #[test]
    fn test_parse_repo_url_too_few_segments() {
        let result = parse_repo_url("https://github.com/torvalds");
        assert!(matches!(result, Err(SizeError::InvalidRepoFormat)));

        let result = parse_repo_url("https://github.com/");
        assert!(matches!(result, Err(SizeError::InvalidRepoFormat)));
    }

    #[test]
    fn test_parse_repo_url_not_a_url() {
        // No scheme means Url::parse fails outright
        let result = parse_repo_url("not a url at all");
        assert!(matches!(result, Err(SizeError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_repo_size_ok() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/torvalds/linux")
            .match_header("user-agent", "repo-size")
            .with_status(200)
            .with_body(r#"{"size": 4096}"#)
            .create_async()
            .await;

        let size = fetch_repo_size_from(&server.url(), "torvalds", "linux")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(size, 4096);
    }

    #[tokio::test]
    async fn test_fetch_repo_size_missing_field_defaults_to_zero() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/some/repo")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let size = fetch_repo_size_from(&server.url(), "some", "repo")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(size, 0);
    }

    #[tokio::test]
    async fn test_fetch_repo_size_not_found() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/no/such")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let result = fetch_repo_size_from(&server.url(), "no", "such").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(SizeError::HttpStatus(404))));

        // The printed message must carry the status code
        let message = result.unwrap_err().to_string();
        assert!(message.contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_repo_size_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/some/repo")
            .with_status(200)
            .with_body("this is not json")
            .create_async()
            .await;

        let result = fetch_repo_size_from(&server.url(), "some", "repo").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(SizeError::Decode(_))));
    }
}
