use std::fmt;

// Domain-level errors for statistics workflows.
#[derive(Debug)]
pub enum StatsError {
    StorageFailure(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::StorageFailure(reason) => write!(f, "storage failure: {reason}"),
        }
    }
}

impl std::error::Error for StatsError {}
