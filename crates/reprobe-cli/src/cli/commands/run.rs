use crate::cli::args::RunArgs;
use crate::exit_codes::{SETUP_ERROR, SUCCESS};
use crate::http_runner::HttpRunner;
use reprobe_core::analyze::{analyze, RepeatPolicy};
use reprobe_core::config::load_plan;
use reprobe_core::orchestrate::{run_batch, BatchOptions};
use reprobe_core::report::console::print_summary;
use reprobe_core::report::json::{write_analyzed, write_report, ANALYZED_FILE, REPORT_FILE};
use reprobe_core::report::build_report;
use reprobe_core::runner::CaseRunner;
use std::sync::Arc;
use std::time::Duration;

pub(crate) async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let cases = match load_plan(&args.plan) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("setup error: {e}");
            return Ok(SETUP_ERROR);
        }
    };

    let runner: Arc<dyn CaseRunner> = Arc::new(HttpRunner::new(args.base_url.clone())?);
    let opts = BatchOptions {
        top_k: args.top_k,
        workers: args.workers,
    };
    let artifacts = match run_batch(cases, runner.clone(), &opts, &args.out).await {
        Ok(artifacts) => artifacts,
        Err(e) => {
            // Anything that escapes the batch is a pre-dispatch problem;
            // per-case failures are already ERROR results inside it.
            eprintln!("setup error: {e}");
            return Ok(SETUP_ERROR);
        }
    };

    let policy = RepeatPolicy {
        repeats: args.repeats,
        pause: Duration::from_millis(args.repeat_delay_ms),
    };
    let analyzed = analyze(
        &artifacts.results,
        &artifacts.selected,
        runner.as_ref(),
        &artifacts.run_dir,
        &policy,
    )
    .await;
    write_analyzed(&analyzed, &artifacts.run_dir.join(ANALYZED_FILE))?;

    let report = build_report(&artifacts.run_dir, &artifacts.results, &analyzed);
    let report_path = artifacts.run_dir.join(REPORT_FILE);
    write_report(&report, &report_path)?;

    print_summary(&artifacts.results, &analyzed);
    println!("report: {}", report_path.display());
    Ok(SUCCESS)
}
