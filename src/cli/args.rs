use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::commands;

/// Entry point for the `stride` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "stride",
    about = "Break a goal into a dated milestone and task plan",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging of the generation pipeline
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a milestone/task plan for a goal.
    Plan(PlanArgs),
    /// List the models currently capable of plan generation.
    Models,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Goal title
    #[arg(long)]
    pub title: String,

    /// Optional goal description
    #[arg(long)]
    pub description: Option<String>,

    /// Importance on a 1-5 scale
    #[arg(long, default_value_t = 3)]
    pub importance: u8,

    /// Estimated effort on a 1-5 scale
    #[arg(long, default_value_t = 3)]
    pub effort: u8,

    /// Target date, yyyy-mm-dd
    #[arg(long = "target-date")]
    pub target_date: String,

    /// Prompt language (pt or en)
    #[arg(long, default_value = "pt")]
    pub language: String,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
