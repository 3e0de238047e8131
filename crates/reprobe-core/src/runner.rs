use crate::model::{ExecutionResult, TestCase};
use async_trait::async_trait;
use std::path::Path;

/// Capability that actually drives the target application for one case.
///
/// Implementations must be safe to invoke concurrently with independent
/// cases and must write artifacts only under `run_dir/<case.id>/`. An
/// implementation should map its own failures to an ERROR-verdict result;
/// the orchestrator converts any `Err` that escapes into one anyway, so a
/// failing runner can never abort sibling cases.
#[async_trait]
pub trait CaseRunner: Send + Sync {
    async fn execute(&self, case: &TestCase, run_dir: &Path) -> anyhow::Result<ExecutionResult>;
}
