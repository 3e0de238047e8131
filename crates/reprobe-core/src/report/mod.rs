pub mod console;
pub mod json;

use crate::model::{AnalyzedCase, ExecutionResult, Verdict};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCase {
    pub id: String,
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Paths relative to the run directory, sorted.
    #[serde(default)]
    pub artifacts: Vec<String>,
}

/// Aggregate report for one run. Built once, write-once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub run_dir: String,
    pub generated_at: DateTime<Utc>,
    pub cases: Vec<ReportCase>,
    pub analyzed: Vec<AnalyzedCase>,
}

/// Merge raw results, on-disk artifact locations, and analyzed
/// reproducibility data. Pure aggregation: never mutates inputs,
/// deterministic given identical inputs and filesystem state.
pub fn build_report(
    run_dir: &Path,
    results: &[ExecutionResult],
    analyzed: &[AnalyzedCase],
) -> Report {
    let cases = results
        .iter()
        .map(|r| ReportCase {
            id: r.id.clone(),
            verdict: r.verdict,
            error: r.error.clone(),
            artifacts: list_artifacts(run_dir, &r.id),
        })
        .collect();
    Report {
        run_dir: run_dir.display().to_string(),
        generated_at: Utc::now(),
        cases,
        analyzed: analyzed.to_vec(),
    }
}

/// Files physically present under `run_dir/<case_id>/`, relative to the
/// run dir. An absent directory is simply an empty artifact list.
fn list_artifacts(run_dir: &Path, case_id: &str) -> Vec<String> {
    let case_dir = run_dir.join(case_id);
    let entries = match std::fs::read_dir(&case_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut artifacts: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().into_string().ok())
        .map(|name| format!("{case_id}/{name}"))
        .collect();
    artifacts.sort();
    artifacts
}
