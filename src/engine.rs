//! Orchestrates one report run: ticker in, [`FinancialReport`] out. Every
//! external call is isolated, so a failure shrinks the report instead of
//! aborting it, and all model calls in a run share one ordered session.

use chrono::Utc;
use log::{debug, info, warn};

use crate::charts::render_charts;
use crate::error::{ReportError, Result};
use crate::extractor::extract_series;
use crate::metrics::derive_metrics;
use crate::prompts::{
    Prompt, METRICS_SUMMARY_INSTRUCTION, OUTLOOK_EXCERPT_LIMIT, OUTLOOK_INSTRUCTION,
    RISK_EXCERPT_LIMIT, RISK_FACTORS_INSTRUCTION,
};
use crate::providers::{CompanyHandle, FilingsClient, ModelClient};
use crate::schema::{ExtractedSeries, FilingDocument, FinancialReport, NarrativeSection};
use crate::section::narrative_section;
use crate::statement::format_financials;

/// The only filing form the pipeline reads.
pub const ANNUAL_REPORT_FORM: &str = "10-K";

/// Document section holding the risk-factors text of a 10-K.
pub const RISK_SECTION_ITEM: &str = "Item 1A";

/// Document section holding management's discussion and analysis.
pub const OUTLOOK_SECTION_ITEM: &str = "Item 7";

pub const METRICS_SECTION_TITLE: &str = "Latest Financial metrics";
pub const RISK_SECTION_TITLE: &str = "Risks involved and Competitions";
pub const OUTLOOK_SECTION_TITLE: &str = "Future Outlook";

/// Report synthesis pipeline over a filings collaborator and a model
/// collaborator. The engine owns no state of its own; each run creates a
/// fresh model session so runs never bleed context into each other.
pub struct ReportEngine<F, M> {
    filings: F,
    model: M,
}

impl<F: FilingsClient, M: ModelClient> ReportEngine<F, M> {
    pub fn new(filings: F, model: M) -> Self {
        Self { filings, model }
    }

    /// Runs the full pipeline for one ticker. Never returns an error: the
    /// worst case is a report whose sections are all absent and whose
    /// chart list is empty.
    ///
    /// Prompt order is an observable contract. The metrics summary goes
    /// first because it carries the statement text the later prompts and
    /// the series extraction refer back to through the shared session.
    pub async fn build_report(&self, ticker: &str) -> FinancialReport {
        info!("building report for {ticker}");
        let mut session = self.model.new_session();

        let company = match self.filings.lookup(ticker).await {
            Ok(company) => Some(company),
            Err(err) => {
                warn!("filings lookup for {ticker} failed: {err}");
                None
            }
        };

        let bundle = company.as_ref().and_then(|c| c.financials());
        let financial_text = format_financials(bundle.as_ref());
        let document = match &company {
            Some(company) => match latest_annual_report(company.as_ref()).await {
                Ok(document) => Some(document),
                Err(err) => {
                    debug!("no annual report text for {ticker}: {err}");
                    None
                }
            },
            None => None,
        };

        let metrics_summary = narrative_section(
            session.as_mut(),
            METRICS_SECTION_TITLE,
            non_empty(&financial_text).map(|text| Prompt::new(METRICS_SUMMARY_INSTRUCTION, text)),
        )
        .await;

        let risk_factors = narrative_section(
            session.as_mut(),
            RISK_SECTION_TITLE,
            document
                .as_ref()
                .and_then(|doc| doc.section(RISK_SECTION_ITEM))
                .and_then(non_empty)
                .map(|text| Prompt::bounded(RISK_FACTORS_INSTRUCTION, text, RISK_EXCERPT_LIMIT)),
        )
        .await;

        let outlook = narrative_section(
            session.as_mut(),
            OUTLOOK_SECTION_TITLE,
            document
                .as_ref()
                .and_then(|doc| doc.section(OUTLOOK_SECTION_ITEM))
                .and_then(non_empty)
                .map(|text| Prompt::bounded(OUTLOOK_INSTRUCTION, text, OUTLOOK_EXCERPT_LIMIT)),
        )
        .await;

        let sections = vec![metrics_summary, risk_factors, outlook];

        // The extraction prompt asks for figures "from previous
        // information"; with no successful turn there is nothing in the
        // session to extract from, so the call is skipped outright.
        let series = if sections.iter().any(NarrativeSection::is_present) {
            extract_series(session.as_mut()).await
        } else {
            debug!("no narrative section succeeded for {ticker}; skipping series extraction");
            ExtractedSeries::default()
        };

        let metrics = derive_metrics(&series);
        let charts = render_charts(&metrics);
        info!(
            "report for {ticker}: {} sections, {} charts",
            sections.iter().filter(|s| s.is_present()).count(),
            charts.len()
        );

        FinancialReport {
            ticker: ticker.to_string(),
            generated_at: Utc::now(),
            sections,
            metrics,
            charts,
        }
    }
}

/// First 10-K on record. The filing list may legitimately be empty, and
/// the service may fail on either call; both collapse to one error the
/// orchestrator turns into "no document".
async fn latest_annual_report(company: &dyn CompanyHandle) -> Result<FilingDocument> {
    let refs = company.filings(ANNUAL_REPORT_FORM).await?;
    let latest = refs
        .first()
        .ok_or(ReportError::MissingSource("no annual report on file"))?;
    Ok(latest.document().await?)
}

fn non_empty(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}
