use async_trait::async_trait;
use reprobe_core::model::{ExecutionResult, Step, TestCase, Verdict};
use reprobe_core::runner::CaseRunner;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

/// HTTP-level Case Runner: fetches the case's page once and evaluates
/// content assertions against the body. Browser-only actions (click,
/// type) are logged, not performed — a real browser driver plugs in
/// behind the same `CaseRunner` trait.
pub struct HttpRunner {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpRunner {
    pub fn new(base_url: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().user_agent("reprobe").build()?;
        Ok(Self { client, base_url })
    }

    async fn fetch(&self, url: &str) -> anyhow::Result<String> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}

enum StepOutcome {
    Done(&'static str),
    Failed(String),
}

fn eval_step(step: &Step, body: &str) -> StepOutcome {
    match step.action.as_str() {
        "assert_contains" | "assert_text" => {
            let needle = step.value.as_deref().unwrap_or_default();
            if needle.is_empty() {
                StepOutcome::Failed("assertion has no value".into())
            } else if body.contains(needle) {
                StepOutcome::Done("assertion held")
            } else {
                StepOutcome::Failed(format!("page does not contain {needle:?}"))
            }
        }
        // The page is fetched once up front; nothing left to do here.
        "navigate" | "wait" => StepOutcome::Done("implicit"),
        // Browser-only interactions.
        _ => StepOutcome::Done("skipped, no browser"),
    }
}

#[async_trait]
impl CaseRunner for HttpRunner {
    async fn execute(&self, case: &TestCase, run_dir: &Path) -> anyhow::Result<ExecutionResult> {
        let case_dir = run_dir.join(&case.id);
        std::fs::create_dir_all(&case_dir)?;

        let url = match case.url.as_deref().or(self.base_url.as_deref()) {
            Some(url) => url.to_string(),
            None => {
                return Ok(ExecutionResult::error(
                    &case.id,
                    "case has no url and no --base-url was given",
                ))
            }
        };

        debug!(id = %case.id, %url, "fetching page");
        let body = match self.fetch(&url).await {
            Ok(body) => body,
            Err(e) => return Ok(ExecutionResult::error(&case.id, format!("fetch {url}: {e}"))),
        };

        let mut artifacts = BTreeMap::new();
        std::fs::write(case_dir.join("dom.html"), &body)?;
        artifacts.insert("dom".to_string(), format!("{}/dom.html", case.id));

        // A failed step never aborts the case, but every swallowed
        // failure lands in steps.log and the result's error detail.
        let mut log = String::new();
        let mut failures = Vec::new();
        for (i, step) in case.steps.iter().enumerate() {
            match eval_step(step, &body) {
                StepOutcome::Done(note) => {
                    let _ = writeln!(log, "step {}: {} ({note})", i + 1, step.action);
                }
                StepOutcome::Failed(reason) => {
                    let _ = writeln!(log, "step {}: {} FAILED: {reason}", i + 1, step.action);
                    failures.push(format!("step {}: {reason}", i + 1));
                }
            }
        }
        std::fs::write(case_dir.join("steps.log"), &log)?;
        artifacts.insert("log".to_string(), format!("{}/steps.log", case.id));

        let (verdict, error) = if failures.is_empty() {
            (Verdict::Pass, None)
        } else {
            (Verdict::Fail, Some(failures.join("; ")))
        };
        Ok(ExecutionResult {
            id: case.id.clone(),
            verdict,
            artifacts,
            error,
        })
    }
}
