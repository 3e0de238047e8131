use crate::model::{AnalyzedCase, ExecutionResult, ReproRecord, TestCase, Verdict};
use crate::runner::CaseRunner;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct RepeatPolicy {
    /// How many times a FAIL case is re-executed.
    pub repeats: u32,
    /// Pause before each repeat, so transient state (animations, network
    /// races, rate limits) settles between attempts. Injectable so tests
    /// can zero it.
    pub pause: Duration,
}

impl Default for RepeatPolicy {
    fn default() -> Self {
        Self {
            repeats: 1,
            pause: Duration::from_millis(500),
        }
    }
}

/// Re-execute every FAIL case `repeats` times to measure reproducibility.
///
/// Repeats run strictly sequentially, one case at a time, deliberately
/// adding no concurrency that could itself introduce new races. PASS and
/// ERROR initial verdicts are never retried; only FAIL is a
/// reproducibility signal. A repeat whose runner call errors is recorded
/// as an ERROR-verdict repeat, kept for audit but not counted in
/// `repeats_failed`.
pub async fn analyze(
    results: &[ExecutionResult],
    cases: &[TestCase],
    runner: &dyn CaseRunner,
    run_dir: &Path,
    policy: &RepeatPolicy,
) -> Vec<AnalyzedCase> {
    let by_id: HashMap<&str, &TestCase> = cases.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut analyzed = Vec::with_capacity(results.len());
    for result in results {
        let repro = if result.verdict == Verdict::Fail && policy.repeats > 0 {
            match by_id.get(result.id.as_str()) {
                Some(&case) => repeat_case(result, case, runner, run_dir, policy).await,
                None => {
                    // Can only happen with a result set from a different
                    // batch; nothing to re-execute.
                    warn!(id = %result.id, "no originating case for failed result; skipping repeats");
                    ReproRecord::no_repeats(result.verdict)
                }
            }
        } else {
            ReproRecord::no_repeats(result.verdict)
        };
        analyzed.push(AnalyzedCase {
            id: result.id.clone(),
            initial: result.clone(),
            repro,
        });
    }
    analyzed
}

async fn repeat_case(
    initial: &ExecutionResult,
    case: &TestCase,
    runner: &dyn CaseRunner,
    run_dir: &Path,
    policy: &RepeatPolicy,
) -> ReproRecord {
    let mut repeat_results = Vec::with_capacity(policy.repeats as usize);
    for attempt in 1..=policy.repeats {
        tokio::time::sleep(policy.pause).await;
        let result = match runner.execute(case, run_dir).await {
            Ok(r) => r,
            Err(e) => {
                warn!(id = %case.id, attempt, error = %e, "repeat execution errored");
                ExecutionResult::error(&case.id, e.to_string())
            }
        };
        debug!(id = %case.id, attempt, verdict = %result.verdict, "repeat completed");
        repeat_results.push(result);
    }
    let repeats_failed = repeat_results
        .iter()
        .filter(|r| r.verdict == Verdict::Fail)
        .count() as u32;
    info!(
        id = %case.id,
        requested = policy.repeats,
        failed = repeats_failed,
        "reproducibility measured"
    );
    ReproRecord {
        initial_verdict: initial.verdict,
        repeats_requested: policy.repeats,
        repeats_failed,
        repeat_results,
    }
}
