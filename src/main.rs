// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse the command-line arguments using clap
// 2. Extract owner/repo from the URL
// 3. Ask the GitHub API for the repository size
// 4. Print the result and exit with proper code (0 = success, 1 = any error)
//
// The whole program is one straight line: there is exactly one network
// request and no state survives past it. Errors anywhere along the line
// short-circuit to a single printed `Error: ...` message.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod error;         // src/error.rs - the failure taxonomy
mod github;        // src/github/ - URL parsing and the API call

// Import items we need from our modules
use cli::Cli;
use clap::{error::ErrorKind, Parser};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use serde::Serialize;

// The #[tokio::main] attribute transforms our async main into a real main
// function. We only await one request, but reqwest is async, so the
// runtime still has to be there to drive it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Every failure prints one line and exits 1 - no retries,
            // no logging beyond this
            println!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
// Returns:
//   Ok(0) = size printed
//   Ok(1) = bad invocation (usage already printed)
//   Err = anything else (printed by main as `Error: ...`)
async fn run() -> Result<i32> {
    // try_parse instead of parse: clap's default behavior on a bad
    // invocation is exit code 2 with output on stderr, but our contract
    // is a usage line on stdout and exit code 1. --help and --version
    // keep their normal clap rendering.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(0);
        }
        Err(_) => {
            println!("{}", cli::USAGE);
            return Ok(1);
        }
    };

    // Pull (owner, repo) out of the URL; this is pure string work and
    // happens before we touch the network
    let (owner, repo) = github::parse_repo_url(&cli.repo_url)?;

    // The one network call
    let size_kb = github::fetch_repo_size(&owner, &repo).await?;

    print_size(size_kb, cli.json)?;
    Ok(0)
}

// What --json prints: the size in both units as one small object
//
// #[derive(Serialize)] lets serde_json turn this struct into JSON
#[derive(Debug, Serialize)]
struct SizeReport {
    size_kb: u64,
    size_mb: f64,
}

impl SizeReport {
    fn new(size_kb: u64) -> Self {
        SizeReport {
            size_kb,
            // GitHub reports kilobytes; 1 MB = 1024 KB
            size_mb: size_kb as f64 / 1024.0,
        }
    }
}

// Prints the result either as the human-readable line or as JSON
fn print_size(size_kb: u64, json: bool) -> Result<()> {
    if json {
        let report = SizeReport::new(size_kb);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_size(size_kb));
    }
    Ok(())
}

// Formats the human-readable output line
//
// Example: 4096 KB -> "Repository size: 4096 KB (~4.00 MB)"
fn format_size(size_kb: u64) -> String {
    format!(
        "Repository size: {} KB (~{:.2} MB)",
        size_kb,
        size_kb as f64 / 1024.0
    )
}
