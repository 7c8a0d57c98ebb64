//! # Finalyzer
//!
//! A library for assembling narrative financial reports for publicly
//! traded companies: it looks up regulatory filings, asks a language
//! model to summarize metrics, risks and outlook, coerces the model's
//! free-text output into a validated metrics series, and produces
//! chart-ready trend data.
//!
//! ## Core Concepts
//!
//! - **Collaborators**: the filings service and the language model are
//!   external; the pipeline talks to them through the traits in
//!   [`providers`]. A Gemini-backed model collaborator ships behind the
//!   `gemini` cargo feature.
//! - **Session**: all model calls in one report run share one ordered
//!   conversation, so prompt order is part of the pipeline's contract.
//! - **Absence is data**: a missing filing, a failed model call or
//!   malformed model output shrinks the report (absent section, empty
//!   series) instead of failing it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use finalyzer::{GeminiClient, ReportEngine};
//!
//! let engine = ReportEngine::new(edgar_client, GeminiClient::new(api_key));
//! let report = engine.build_report("ACME").await;
//! for section in report.sections.iter().filter(|s| s.is_present()) {
//!     println!("## {}\n{}", section.title, section.body.as_deref().unwrap_or(""));
//! }
//! ```

pub mod charts;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod metrics;
pub mod prompts;
pub mod providers;
pub mod schema;
pub mod section;
pub mod statement;

#[cfg(feature = "gemini")]
pub mod llm;

pub use charts::render_charts;
pub use engine::{ReportEngine, ANNUAL_REPORT_FORM};
pub use error::{ReportError, Result};
pub use extractor::{extract_series, parse_series, SeriesPayload};
pub use metrics::derive_metrics;
pub use prompts::Prompt;
pub use providers::{
    CompanyHandle, FilingRef, FilingsClient, FilingsError, ModelClient, ModelError, ModelSession,
};
pub use schema::*;
pub use section::narrative_section;
pub use statement::format_financials;

#[cfg(feature = "gemini")]
pub use llm::{GeminiChat, GeminiClient};
