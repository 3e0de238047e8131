use crate::model::{ScoredCase, TestCase};

const STEP_WEIGHT: f64 = 1.0;
const PRIORITY_WEIGHT: f64 = 2.0;

/// Linear, explainable heuristic: more steps means more coverage, higher
/// declared priority means more important. Scores are only meaningful in
/// relative order within one batch; no normalization.
pub fn score(case: &TestCase) -> f64 {
    case.steps.len() as f64 * STEP_WEIGHT + case.priority.weight() * PRIORITY_WEIGHT
}

/// Rank cases strictly descending by score. The sort is stable, so ties
/// keep input order and the ranking is reproducible across runs.
pub fn rank(cases: Vec<TestCase>) -> Vec<ScoredCase> {
    let mut scored: Vec<ScoredCase> = cases
        .into_iter()
        .map(|case| {
            let score = score(&case);
            ScoredCase { case, score }
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// First `min(k, len)` cases of a ranked sequence. `k == 0` selects none.
pub fn select_top_k(scored: Vec<ScoredCase>, k: usize) -> Vec<TestCase> {
    scored.into_iter().take(k).map(|s| s.case).collect()
}
