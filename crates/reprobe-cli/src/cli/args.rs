use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reprobe",
    version,
    about = "Rank, run, and reproduce browser-driven test cases against a web application"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full pipeline: rank, execute the top-K, analyze reproducibility, report
    Run(RunArgs),
    /// Rank a plan's cases and write the scored top-K
    Rank(RankArgs),
    /// Rebuild the aggregate report from a run directory's persisted results
    Report(ReportArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Plan file (JSON array of cases, or {"cases": [...]})
    #[arg(long)]
    pub plan: PathBuf,

    /// Run directory for artifacts and result files
    #[arg(long)]
    pub out: PathBuf,

    /// How many top-ranked cases to execute
    #[arg(long, default_value_t = 10)]
    pub top_k: usize,

    /// Maximum simultaneously in-flight case executions
    #[arg(long, default_value_t = 3)]
    pub workers: usize,

    /// Re-executions per initially failing case
    #[arg(long, default_value_t = 1)]
    pub repeats: u32,

    /// Pause before each repeat execution, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub repeat_delay_ms: u64,

    /// Fallback target URL for cases that carry none
    #[arg(long, env = "REPROBE_BASE_URL")]
    pub base_url: Option<String>,
}

#[derive(Args)]
pub struct RankArgs {
    #[arg(long)]
    pub plan: PathBuf,

    /// Output file for the scored top-K
    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = 10)]
    pub top_k: usize,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Run directory containing raw_results.json and analyzed.json
    #[arg(long)]
    pub run_dir: PathBuf,

    /// Report output path (default: <run-dir>/report.json)
    #[arg(long)]
    pub out: Option<PathBuf>,
}
