//! Contracts for the external collaborators the pipeline depends on but
//! does not implement: the filings-retrieval service and the language
//! model. Production adapters live elsewhere (see the `gemini` feature);
//! tests substitute scripted implementations.

use async_trait::async_trait;
use thiserror::Error;

use crate::schema::{FilingDocument, StatementBundle};

/// Errors surfaced by the filings collaborator.
#[derive(Error, Debug)]
pub enum FilingsError {
    #[error("no company found for ticker '{0}'")]
    NotFound(String),

    #[error("filings service error: {0}")]
    Unavailable(String),
}

/// Generic failure of a model call: transport, quota, safety filter.
/// The pipeline treats every cause the same way, so no finer split.
#[derive(Error, Debug)]
#[error("model call failed: {0}")]
pub struct ModelError(pub String);

/// Resolves a ticker to a company's filings and statements.
#[async_trait]
pub trait FilingsClient: Send + Sync {
    async fn lookup(&self, ticker: &str) -> Result<Box<dyn CompanyHandle>, FilingsError>;
}

/// A resolved company: its structured statements plus its filing history.
#[async_trait]
pub trait CompanyHandle: Send + Sync {
    /// The company's statement bundle, when the service has one.
    fn financials(&self) -> Option<StatementBundle>;

    /// Filings of the given form, newest first. May be empty.
    async fn filings(&self, form: &str) -> Result<Vec<Box<dyn FilingRef>>, FilingsError>;
}

/// One filing on record with the regulator; the document body is fetched
/// lazily because it can be large.
#[async_trait]
pub trait FilingRef: Send + Sync {
    async fn document(&self) -> Result<FilingDocument, FilingsError>;
}

/// One ordered conversation with the model. Sessions are stateful: every
/// send appends the prompt and the reply to the history that later calls
/// are answered against, so call order is part of the pipeline's contract.
#[async_trait]
pub trait ModelSession: Send {
    async fn send(&mut self, prompt: &str) -> Result<String, ModelError>;
}

/// Hands out model sessions. Exactly one session backs one report run;
/// runs never share a session.
pub trait ModelClient: Send + Sync {
    fn new_session(&self) -> Box<dyn ModelSession>;
}
