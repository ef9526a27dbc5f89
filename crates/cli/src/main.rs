// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Classify CLI
//!
//! Serves the classification gateway, classifies tokens locally, and
//! smoke-tests a running deployment.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "classify",
    version,
    about = "Token classification service.",
    long_about = "Partitions token lists into odd, even, alphabetic and special buckets over HTTP or locally."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP gateway.
    Serve(serve::ServeArgs),

    /// Classify tokens locally and print the result as JSON.
    Run(run::RunArgs),

    /// Post the reference inputs to a running gateway and verify the answers.
    Smoke(smoke::SmokeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Run(args) => run::run(args),
        Commands::Smoke(args) => smoke::run(args).await,
    }
}
