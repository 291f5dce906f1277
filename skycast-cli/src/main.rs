//! Binary crate for the `skycast` terminal client.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive dashboard loop
//! - Human-friendly output formatting

use clap::Parser;

mod app;
mod cli;
mod client;
mod geo;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
