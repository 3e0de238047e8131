use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium,
    High,
    /// Unrecognized or missing priorities fall back to low.
    #[default]
    #[serde(other)]
    Low,
}

impl Priority {
    pub fn weight(self) -> f64 {
        match self {
            Priority::Low => 1.0,
            Priority::Medium => 2.0,
            Priority::High => 3.0,
        }
    }
}

/// One UI action within a case. `action` is opaque to the core; the
/// runner decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// An identified, ordered sequence of UI actions against the target
/// application. Step order is semantically significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
    Error,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
            Verdict::Error => write!(f, "ERROR"),
        }
    }
}

/// A case paired with its computed rank score. Derived projection,
/// recomputed per batch, never persisted as case state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCase {
    pub case: TestCase,
    pub score: f64,
}

/// Outcome of running one case once. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub id: String,
    pub verdict: Verdict,
    #[serde(default)]
    pub artifacts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn error(id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            verdict: Verdict::Error,
            artifacts: BTreeMap::new(),
            error: Some(detail.into()),
        }
    }
}

/// Summary of repeated executions of one case.
///
/// Invariants: `repeats_failed <= repeats_requested`, and
/// `repeats_requested == 0` whenever `initial_verdict != FAIL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReproRecord {
    pub initial_verdict: Verdict,
    pub repeats_requested: u32,
    pub repeats_failed: u32,
    #[serde(default)]
    pub repeat_results: Vec<ExecutionResult>,
}

impl ReproRecord {
    pub fn no_repeats(initial_verdict: Verdict) -> Self {
        Self {
            initial_verdict,
            repeats_requested: 0,
            repeats_failed: 0,
            repeat_results: Vec::new(),
        }
    }

    /// Interpretation for downstream consumers; not enforced anywhere
    /// in the pipeline itself.
    pub fn classification(&self) -> ReproClass {
        if self.initial_verdict != Verdict::Fail || self.repeats_requested == 0 {
            return ReproClass::NotRetried;
        }
        if self.repeats_failed == self.repeats_requested {
            ReproClass::Deterministic
        } else if self.repeats_failed > 0 {
            ReproClass::Flaky
        } else {
            ReproClass::NotReproduced
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReproClass {
    /// Every repeat failed again.
    Deterministic,
    /// Some repeats failed, some did not.
    Flaky,
    /// Initial FAIL that no repeat reproduced.
    NotReproduced,
    /// PASS/ERROR initial verdict, or zero repeats requested.
    NotRetried,
}

/// One case's worth of analyzer output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedCase {
    pub id: String,
    pub initial: ExecutionResult,
    pub repro: ReproRecord,
}
