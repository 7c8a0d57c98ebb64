use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tabular financial statement: line items down, reporting periods
/// across. Cells may be empty where the filer reported nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    /// Statement heading as presented, e.g. "Balance Sheet".
    pub name: String,
    /// Reporting period column headers, newest first as filed.
    pub periods: Vec<String>,
    pub rows: Vec<StatementRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub label: String,
    /// One value per period column; `None` where the cell is blank.
    pub values: Vec<Option<f64>>,
}

impl StatementTable {
    /// Deterministic text serialization used when the table is embedded in
    /// a prompt. Tab-separated, one row per line, header lines first.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push('\n');
        for period in &self.periods {
            out.push('\t');
            out.push_str(period);
        }
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.label);
            for value in &row.values {
                out.push('\t');
                match value {
                    Some(v) => out.push_str(&format!("{v}")),
                    None => out.push('-'),
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Balance sheet, cash flow and income statement for one reporting entity.
/// Any of the three may be missing from the upstream response; the bundle
/// is immutable once fetched and owned by the run that fetched it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementBundle {
    pub balance_sheet: Option<StatementTable>,
    pub cash_flow: Option<StatementTable>,
    pub income_statement: Option<StatementTable>,
}

/// Named free-text sections of one annual report, keyed by item label
/// ("Item 1A", "Item 7"). Keys may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilingDocument {
    sections: BTreeMap<String, String>,
}

impl FilingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.sections.insert(key.into(), text.into());
        self
    }

    pub fn section(&self, key: &str) -> Option<&str> {
        self.sections.get(key).map(String::as_str)
    }
}

/// One fiscal year of model-extracted figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub revenue: f64,
    pub net_income: f64,
}

/// Year-ordered revenue and net income figures recovered from model
/// output. Years are strictly increasing and every kept figure is finite.
/// Empty means "no usable data" and is a valid value, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSeries {
    pub points: Vec<SeriesPoint>,
}

impl ExtractedSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// A series point plus the ratios derived from it. Either ratio may be
/// undefined for a given year; `None` is never rendered as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub year: i32,
    pub revenue: f64,
    pub net_income: f64,
    /// Percent change against the prior year; the first year has none.
    pub revenue_growth_rate: Option<f64>,
    /// Net income over revenue, in percent; undefined when revenue is zero.
    pub profit_margin: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub points: Vec<MetricPoint>,
}

impl DerivedMetrics {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A titled block of model prose. A `body` of `None` means the section is
/// left out of the rendered report entirely; it is never replaced by a
/// placeholder or error string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSection {
    pub title: String,
    pub body: Option<String>,
}

impl NarrativeSection {
    pub fn present(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Some(body.into()),
        }
    }

    pub fn absent(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.body.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub year: i32,
    pub value: f64,
}

/// Declarative bar-chart description handed to the presentation layer.
/// The pipeline decides what is plotted; drawing is someone else's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: String,
    pub bars: Vec<ChartBar>,
}

/// Everything one pipeline run produced for a ticker. Sections keep their
/// pipeline order, absent bodies included, so the presentation layer can
/// render the survivors in order and skip the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReport {
    pub ticker: String,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<NarrativeSection>,
    pub metrics: DerivedMetrics,
    pub charts: Vec<ChartSpec>,
}
