use crate::model::{AnalyzedCase, ExecutionResult};
use crate::report::Report;
use serde::Deserialize;
use std::path::Path;

pub const RAW_RESULTS_FILE: &str = "raw_results.json";
pub const ANALYZED_FILE: &str = "analyzed.json";
pub const REPORT_FILE: &str = "report.json";

pub fn write_raw_results(results: &[ExecutionResult], out: &Path) -> anyhow::Result<()> {
    let v = serde_json::json!({ "results": results });
    std::fs::write(out, serde_json::to_string_pretty(&v)?)?;
    Ok(())
}

pub fn read_raw_results(path: &Path) -> anyhow::Result<Vec<ExecutionResult>> {
    #[derive(Deserialize)]
    struct RawFile {
        results: Vec<ExecutionResult>,
    }
    let raw: RawFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    Ok(raw.results)
}

pub fn write_analyzed(analyzed: &[AnalyzedCase], out: &Path) -> anyhow::Result<()> {
    let v = serde_json::json!({ "analyzed": analyzed });
    std::fs::write(out, serde_json::to_string_pretty(&v)?)?;
    Ok(())
}

pub fn read_analyzed(path: &Path) -> anyhow::Result<Vec<AnalyzedCase>> {
    #[derive(Deserialize)]
    struct AnalyzedFile {
        analyzed: Vec<AnalyzedCase>,
    }
    let raw: AnalyzedFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    Ok(raw.analyzed)
}

pub fn write_report(report: &Report, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(report)?)?;
    Ok(())
}
