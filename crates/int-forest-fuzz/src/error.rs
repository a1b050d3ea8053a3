use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuzzError {
    /// The set under test disagreed with the reference set.
    #[error(
        "{strategy} diverged at task {task}, step {step}: lookup={query} expected={expected} actual={actual} (seed {seed})"
    )]
    Divergence {
        strategy: String,
        seed: u64,
        task: usize,
        step: usize,
        query: i32,
        expected: bool,
        actual: bool,
        /// Tree dump taken right after the mismatch, when enabled.
        dump: Option<String>,
    },
    #[error("{strategy} broke an invariant at task {task}, step {step}: {reason} (seed {seed})")]
    Invariant {
        strategy: String,
        seed: u64,
        task: usize,
        step: usize,
        reason: String,
    },
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidArgument { flag: String, value: String },
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

impl FuzzError {
    /// Tree dump attached to a divergence, if any.
    pub fn dump(&self) -> Option<&str> {
        match self {
            FuzzError::Divergence { dump, .. } => dump.as_deref(),
            _ => None,
        }
    }
}
