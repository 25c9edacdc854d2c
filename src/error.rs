//! Error types for birthday-table.
//!
//! Every failure aborts the current invocation; `main` reports it and
//! exits non-zero.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BirthdayError>;

#[derive(Debug, Error)]
pub enum BirthdayError {
    /// Wrong argument count or an unrecognized output format
    #[error("{0}")]
    Usage(String),

    /// Factorial requested for a negative integer
    #[error("factorial of negative number {0}")]
    Domain(i64),

    /// The plotting collaborator is missing or exited non-zero
    #[error("chart renderer failed: {0}")]
    ExternalTool(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML output failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BirthdayError {
    pub fn is_usage(&self) -> bool {
        matches!(self, BirthdayError::Usage(_))
    }
}
