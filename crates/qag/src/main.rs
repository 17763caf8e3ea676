//! QA grounding engine - Entry Point

// Force-link qag-providers to ensure linkme registrations are included
extern crate qag_providers;

use clap::Parser;
use qag::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
