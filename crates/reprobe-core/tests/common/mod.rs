#![allow(dead_code)]

use async_trait::async_trait;
use reprobe_core::model::{ExecutionResult, Priority, Step, TestCase, Verdict};
use reprobe_core::runner::CaseRunner;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Clone)]
pub enum Outcome {
    Verdict(Verdict),
    Error(String),
}

/// Test double for the Case Runner: replays a scripted sequence of
/// outcomes per case id (last outcome repeats once exhausted; unscripted
/// ids pass) and counts invocations.
#[derive(Default)]
pub struct ScriptedRunner {
    script: HashMap<String, Vec<Outcome>>,
    calls: Mutex<HashMap<String, usize>>,
    pub delay: Duration,
    current: AtomicUsize,
    max_concurrent: AtomicUsize,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, id: &str, outcomes: Vec<Outcome>) -> Self {
        self.script.insert(id.to_string(), outcomes);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self, id: &str) -> usize {
        *self.calls.lock().unwrap().get(id).unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaseRunner for ScriptedRunner {
    async fn execute(&self, case: &TestCase, _run_dir: &Path) -> anyhow::Result<ExecutionResult> {
        let attempt = {
            let mut calls = self.calls.lock().unwrap();
            let n = calls.entry(case.id.clone()).or_insert(0);
            let attempt = *n;
            *n += 1;
            attempt
        };

        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_concurrent.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.current.fetch_sub(1, Ordering::SeqCst);

        let outcome = self
            .script
            .get(&case.id)
            .and_then(|s| s.get(attempt.min(s.len().saturating_sub(1))))
            .cloned()
            .unwrap_or(Outcome::Verdict(Verdict::Pass));

        match outcome {
            Outcome::Verdict(verdict) => Ok(ExecutionResult {
                id: case.id.clone(),
                verdict,
                artifacts: BTreeMap::new(),
                error: if verdict == Verdict::Fail {
                    Some("assertion mismatch".into())
                } else {
                    None
                },
            }),
            Outcome::Error(msg) => Err(anyhow::anyhow!(msg)),
        }
    }
}

pub fn case(id: &str, steps: usize, priority: Priority) -> TestCase {
    TestCase {
        id: id.into(),
        title: None,
        description: None,
        url: None,
        priority,
        tags: Vec::new(),
        steps: (0..steps)
            .map(|_| Step {
                action: "click".into(),
                selector: Some("button".into()),
                value: None,
            })
            .collect(),
    }
}

pub fn result(id: &str, verdict: Verdict) -> ExecutionResult {
    ExecutionResult {
        id: id.into(),
        verdict,
        artifacts: BTreeMap::new(),
        error: None,
    }
}
