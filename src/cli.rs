// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Our CLI is deliberately tiny: one positional argument (the repository
// URL) and one optional flag (--json). No subcommands needed.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-size",
    version = "0.1.0",
    about = "Report the storage size of a GitHub repository",
    long_about = "repo-size asks the GitHub API how much storage a repository uses \
                  and prints the answer in kilobytes and megabytes."
)]
pub struct Cli {
    /// GitHub repository URL (e.g., https://github.com/torvalds/linux)
    ///
    /// This is a positional argument (required, no flag needed)
    pub repo_url: String,

    /// Output the size as JSON instead of a human-readable line
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,
}

/// The usage line we print ourselves when the argument count is wrong.
///
/// We keep this separate from clap's auto-generated help because the
/// contract for bad invocations is a single line on standard output
/// followed by exit code 1.
pub const USAGE: &str = "Usage: repo-size <github-repo-url>";


// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no Subcommand enum?
//    - Subcommands make sense when a tool does several different things
//    - This tool does exactly one thing, so a flat struct is simpler
//    - clap handles both styles with the same derive API
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------
