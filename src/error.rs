//! Error type shared by the harness, the registry and the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("variant '{variant}' disagrees with '{reference}': expected {expected}, got {actual}")]
    Mismatch {
        variant: &'static str,
        reference: &'static str,
        expected: String,
        actual: String,
    },

    #[error("variant '{variant}' missed the closed-form sum: expected {expected}, got {actual}")]
    ClosedForm {
        variant: &'static str,
        expected: String,
        actual: String,
    },

    #[error("no '{0}' reference variant registered")]
    MissingReference(&'static str),

    #[error("algorithm '{0}' not found")]
    UnknownAlgorithm(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {option} expects {expected}, got '{value}'")]
    InvalidValue {
        option: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("option {0} requires a value")]
    MissingValue(&'static str),

    #[error("failed to export CSV to {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
