// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands a StatsConfig to
// Layer 2. Nothing here touches the corpus directly.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::Commands;

use crate::application::stats_use_case::{StatsConfig, StatsUseCase};

#[derive(Parser, Debug)]
#[command(
    name = "cgu-stats",
    version,
    about = "Word counts and readability scores for a corpus of terms-of-service documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config: StatsConfig = match self.command {
            Commands::Stats(args) => args.into(),
            Commands::Historical(args) => args.into(),
        };

        let outcome = StatsUseCase::new(config).execute()?;
        println!("{}", outcome.report_path.display());
        Ok(())
    }
}
