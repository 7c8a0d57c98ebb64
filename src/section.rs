//! Produces one titled narrative section, or its typed absence. The model
//! is only consulted when the required source data exists; a failed call
//! degrades to absence. Raw model text is the section body, unmodified;
//! the pipeline does not fact-check prose.

use log::{debug, warn};

use crate::error::{ReportError, Result};
use crate::prompts::Prompt;
use crate::providers::ModelSession;
use crate::schema::NarrativeSection;

/// `prompt` is `None` when the section's required upstream data was
/// absent or empty; the session is not touched in that case.
pub async fn narrative_section(
    session: &mut dyn ModelSession,
    title: &str,
    prompt: Option<Prompt>,
) -> NarrativeSection {
    match section_body(session, prompt).await {
        Ok(body) => NarrativeSection::present(title, body),
        Err(err @ ReportError::MissingSource(_)) => {
            debug!("section '{title}' skipped: {err}");
            NarrativeSection::absent(title)
        }
        Err(err) => {
            warn!("section '{title}' dropped: {err}");
            NarrativeSection::absent(title)
        }
    }
}

async fn section_body(session: &mut dyn ModelSession, prompt: Option<Prompt>) -> Result<String> {
    let prompt = prompt.ok_or(ReportError::MissingSource("section source text"))?;
    Ok(session.send(&prompt.compose()).await?)
}
