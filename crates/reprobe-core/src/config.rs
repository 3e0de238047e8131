use crate::errors::SetupError;
use crate::model::TestCase;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Plan files come in two shapes: the planner writes a bare array of
/// cases, older tooling wraps it in `{ "cases": [...] }`. Accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Wrapped { cases: Vec<TestCase> },
    Bare(Vec<TestCase>),
}

pub fn load_plan(path: &Path) -> Result<Vec<TestCase>, SetupError> {
    let raw = std::fs::read_to_string(path).map_err(|e| SetupError::PlanRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let plan: PlanFile = serde_json::from_str(&raw).map_err(|e| SetupError::PlanParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let cases = match plan {
        PlanFile::Wrapped { cases } => cases,
        PlanFile::Bare(cases) => cases,
    };
    validate_cases(&cases)?;
    Ok(cases)
}

fn validate_cases(cases: &[TestCase]) -> Result<(), SetupError> {
    if cases.is_empty() {
        return Err(SetupError::EmptyPlan);
    }
    let mut seen = HashSet::new();
    for (i, case) in cases.iter().enumerate() {
        if case.id.is_empty() {
            return Err(SetupError::EmptyCaseId(i));
        }
        if !seen.insert(case.id.as_str()) {
            return Err(SetupError::DuplicateCaseId(case.id.clone()));
        }
    }
    Ok(())
}
