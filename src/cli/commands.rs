// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands, one per corpus layout:
//
//   stats       <service>/<name>.md
//   historical  <service>/<name>/<iso date>.md
//
// Both share the same flags through CommonArgs.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::stats_use_case::StatsConfig;
use crate::domain::identity::Layout;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute stats for the current version of every document
    Stats(StatsArgs),

    /// Compute stats for every dated version of every document
    Historical(HistoricalArgs),
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to your local CGUs-versions repository
    #[arg(short, long, default_value = "../CGUs-versions")]
    pub path: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct HistoricalArgs {
    /// Path to your local cgus-dataset folder
    #[arg(short, long, default_value = "../CGUs/cgus-dataset/")]
    pub path: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Output folder for the generated statistics
    #[arg(short, long, default_value = "./reports")]
    pub outdir: String,

    /// CMU Pronouncing Dictionary file used to count syllables (required)
    #[arg(long, env = "CGU_CMUDICT")]
    pub cmudict: Option<String>,

    /// Also analyse .md files sitting directly in the corpus root
    #[arg(long)]
    pub include_top_level: bool,

    /// Abort on the first document that cannot be analysed
    #[arg(long)]
    pub fail_fast: bool,
}

impl CommonArgs {
    fn into_config(self, corpus_dir: String, layout: Layout) -> StatsConfig {
        StatsConfig {
            corpus_dir,
            outdir:            self.outdir,
            layout,
            cmudict:           self.cmudict,
            include_top_level: self.include_top_level,
            fail_fast:         self.fail_fast,
        }
    }
}

/// The application layer never sees clap types.
impl From<StatsArgs> for StatsConfig {
    fn from(a: StatsArgs) -> Self {
        a.common.into_config(a.path, Layout::Current)
    }
}

impl From<HistoricalArgs> for StatsConfig {
    fn from(a: HistoricalArgs) -> Self {
        a.common.into_config(a.path, Layout::Historical)
    }
}
