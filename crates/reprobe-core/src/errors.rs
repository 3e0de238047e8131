use std::path::PathBuf;
use thiserror::Error;

/// Fatal pre-dispatch errors. Everything that goes wrong after dispatch
/// is contained per case and turned into result data instead.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read plan {path}: {source}")]
    PlanRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plan {path}: {source}")]
    PlanParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("plan has no cases")]
    EmptyPlan,

    #[error("case at index {0} has an empty id")]
    EmptyCaseId(usize),

    #[error("duplicate case id in plan: {0}")]
    DuplicateCaseId(String),

    #[error("failed to create run directory {path}: {source}")]
    RunDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
