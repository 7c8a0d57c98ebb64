use thiserror::Error;

use crate::providers::{FilingsError, ModelError};

/// Why a section or extraction was left out of a report.
///
/// Nothing in this taxonomy is fatal: the orchestrator maps every variant
/// to an absent section or an empty series and keeps going. The worst case
/// is a report with zero sections and zero charts, which is a valid result.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("required source data is missing: {0}")]
    MissingSource(&'static str),

    #[error(transparent)]
    Filings(#[from] FilingsError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("model returned malformed structured output: {0}")]
    MalformedOutput(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
