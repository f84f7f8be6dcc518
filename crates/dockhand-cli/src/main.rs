//! # dockhand — specification graph CLI
//!
//! Resolves a declarative environment specification down to the active
//! subset required by the configured bundles, and answers repository
//! and ordering queries over the result.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
