use crate::errors::SetupError;
use crate::model::{ExecutionResult, TestCase};
use crate::rank::{rank, select_top_k};
use crate::report::json::{write_raw_results, RAW_RESULTS_FILE};
use crate::runner::CaseRunner;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of top-ranked cases to dispatch.
    pub top_k: usize,
    /// Maximum simultaneously in-flight case executions.
    pub workers: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            top_k: 10,
            workers: 3,
        }
    }
}

/// Raw output of one orchestration run. `results` are in completion
/// order; consumers must key lookups by case id, never by position.
#[derive(Debug, Clone)]
pub struct BatchArtifacts {
    pub run_dir: PathBuf,
    pub selected: Vec<TestCase>,
    pub results: Vec<ExecutionResult>,
}

/// Rank the candidate cases, dispatch the top `top_k` to the runner with
/// at most `workers` in flight, and persist the collected results as one
/// batch under `out_dir`.
///
/// Every dispatched case yields exactly one result: a runner failure is
/// contained at that case's boundary and recorded as an ERROR verdict,
/// never aborting sibling executions. There is no batch-level deadline;
/// a hung case delays completion unless the runner enforces its own
/// timeouts.
pub async fn run_batch(
    cases: Vec<TestCase>,
    runner: Arc<dyn CaseRunner>,
    opts: &BatchOptions,
    out_dir: &Path,
) -> anyhow::Result<BatchArtifacts> {
    let selected = select_top_k(rank(cases), opts.top_k);

    // Run dir must exist before any dispatch; each case writes only
    // beneath its own <id>/ subdirectory afterwards.
    std::fs::create_dir_all(out_dir).map_err(|e| SetupError::RunDir {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    let sem = Arc::new(Semaphore::new(opts.workers.max(1)));
    let mut join_set = JoinSet::new();
    info!(
        selected = selected.len(),
        workers = opts.workers,
        run_dir = %out_dir.display(),
        "dispatching batch"
    );

    for case in &selected {
        let permit = sem.clone().acquire_owned().await?;
        let runner = runner.clone();
        let case = case.clone();
        let run_dir = out_dir.to_path_buf();
        join_set.spawn(async move {
            let _permit = permit;
            execute_one(runner.as_ref(), &case, &run_dir).await
        });
    }

    let mut results = Vec::with_capacity(selected.len());
    while let Some(joined) = join_set.join_next().await {
        let result = match joined {
            Ok(result) => result,
            Err(e) => {
                // Only panics/cancellation land here; the task itself
                // never returns Err.
                warn!(error = %e, "case task did not complete");
                ExecutionResult::error("unknown", format!("task error: {e}"))
            }
        };
        info!(id = %result.id, verdict = %result.verdict, "case completed");
        results.push(result);
    }

    write_raw_results(&results, &out_dir.join(RAW_RESULTS_FILE))?;

    Ok(BatchArtifacts {
        run_dir: out_dir.to_path_buf(),
        selected,
        results,
    })
}

async fn execute_one(runner: &dyn CaseRunner, case: &TestCase, run_dir: &Path) -> ExecutionResult {
    match runner.execute(case, run_dir).await {
        Ok(mut result) => {
            if result.id != case.id {
                warn!(got = %result.id, expected = %case.id, "runner returned mismatched case id");
                result.id = case.id.clone();
            }
            result
        }
        Err(e) => {
            warn!(id = %case.id, error = %e, "runner failed; recording ERROR verdict");
            ExecutionResult::error(&case.id, e.to_string())
        }
    }
}
