use anyhow::Result;
use clap::Parser;

use stride::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse().run().await
}
