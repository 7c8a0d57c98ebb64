//! Coerces the model's free-text reply to the series-extraction prompt
//! into a validated [`ExtractedSeries`]. Model output is not guaranteed to
//! be clean JSON, so parsing is best-effort and total: any input string
//! maps to a well-formed series, with the empty series standing in for
//! every parse or validation failure.

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReportError, Result};
use crate::prompts::SERIES_EXTRACTION_INSTRUCTION;
use crate::providers::ModelSession;
use crate::schema::{ExtractedSeries, SeriesPoint};

/// The shape the extraction prompt asks the model to produce: three
/// equal-length columns zipped positionally into series entries. Cells are
/// kept loose (`Value`) so one bad cell drops one entry, not the reply.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeriesPayload {
    #[serde(rename = "Year")]
    pub year: Vec<Value>,
    #[serde(rename = "Revenue")]
    pub revenue: Vec<Value>,
    #[serde(rename = "Net_Income")]
    pub net_income: Vec<Value>,
}

impl SeriesPayload {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SeriesPayload)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}

/// Best-effort cleanup before JSON parsing: take the outermost braced
/// object, which also discards markdown code fences and prose around it.
fn clean_json_output(raw: &str) -> &str {
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            return &raw[start..=end];
        }
    }
    raw.trim()
}

/// Parses and validates one model reply. Errors carry enough context to
/// log; callers that want totality go through [`parse_series`].
pub fn try_parse_series(raw: &str) -> Result<ExtractedSeries> {
    let cleaned = clean_json_output(raw);

    let payload: SeriesPayload = serde_json::from_str(cleaned)
        .map_err(|err| ReportError::MalformedOutput(err.to_string()))?;

    if payload.year.len() != payload.revenue.len()
        || payload.year.len() != payload.net_income.len()
    {
        return Err(ReportError::MalformedOutput(format!(
            "column lengths differ: {} years, {} revenues, {} net incomes",
            payload.year.len(),
            payload.revenue.len(),
            payload.net_income.len()
        )));
    }

    let mut points: Vec<SeriesPoint> = payload
        .year
        .iter()
        .zip(&payload.revenue)
        .zip(&payload.net_income)
        .filter_map(|((year, revenue), net_income)| {
            let year = year.as_i64()?;
            let revenue = as_finite(revenue)?;
            let net_income = as_finite(net_income)?;
            Some(SeriesPoint {
                year: year as i32,
                revenue,
                net_income,
            })
        })
        .collect();

    points.sort_by_key(|p| p.year);
    // Strictly increasing years: the first occurrence of a duplicate wins.
    points.dedup_by_key(|p| p.year);

    Ok(ExtractedSeries { points })
}

/// Total over arbitrary strings: every failure collapses to the empty
/// series. This is the only parse entry point the pipeline uses.
pub fn parse_series(raw: &str) -> ExtractedSeries {
    match try_parse_series(raw) {
        Ok(series) => series,
        Err(err) => {
            debug!("discarding series response: {err}");
            ExtractedSeries::default()
        }
    }
}

/// Sends the fixed extraction instruction over the run's session and
/// coerces the reply. A failed call yields the empty series, same as a
/// malformed reply.
pub async fn extract_series(session: &mut dyn ModelSession) -> ExtractedSeries {
    match session.send(SERIES_EXTRACTION_INSTRUCTION).await {
        Ok(reply) => parse_series(&reply),
        Err(err) => {
            debug!("series extraction call failed: {err}");
            ExtractedSeries::default()
        }
    }
}

fn as_finite(value: &Value) -> Option<f64> {
    let n = value.as_f64()?;
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let series =
            parse_series(r#"{"Year":[2021,2022],"Revenue":[100,150],"Net_Income":[10,20]}"#);
        assert_eq!(
            series.points,
            vec![
                SeriesPoint {
                    year: 2021,
                    revenue: 100.0,
                    net_income: 10.0
                },
                SeriesPoint {
                    year: 2022,
                    revenue: 150.0,
                    net_income: 20.0
                },
            ]
        );
    }

    #[test]
    fn test_total_over_garbage_inputs() {
        for raw in [
            "",
            "   ",
            "not json at all",
            "{",
            "}{",
            "null",
            "[1,2,3]",
            r#"{"Year":[2021]}"#,
            r#"{"Revenue":[1],"Net_Income":[1]}"#,
            "{\"Year\": [2021], \"Revenue\": [100], \"Net_Income\"",
        ] {
            assert!(parse_series(raw).is_empty(), "input {raw:?} must yield empty");
        }
    }

    #[test]
    fn test_mismatched_column_lengths_yield_empty() {
        let raw = r#"{"Year":[2021,2022],"Revenue":[100],"Net_Income":[10,20]}"#;
        assert!(parse_series(raw).is_empty());
        assert!(matches!(
            try_parse_series(raw),
            Err(ReportError::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_code_fences_and_prose_are_stripped() {
        let raw = "Sure, here is the data:\n```json\n{\"Year\":[2023],\"Revenue\":[5],\"Net_Income\":[1]}\n```\n";
        let series = parse_series(raw);
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].year, 2023);
    }

    #[test]
    fn test_bad_entries_are_dropped_individually() {
        let raw = r#"{"Year":[2021,"n/a",2023],"Revenue":[100,200,null],"Net_Income":[10,20,30]}"#;
        let series = parse_series(raw);
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].year, 2021);
    }

    #[test]
    fn test_years_are_sorted_and_deduplicated() {
        let raw = r#"{"Year":[2023,2021,2023],"Revenue":[300,100,999],"Net_Income":[30,10,99]}"#;
        let series = parse_series(raw);
        let years: Vec<i32> = series.points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2021, 2023]);
        // First occurrence of 2023 after the stable sort wins.
        assert_eq!(series.points[1].revenue, 300.0);
    }

    #[test]
    fn test_string_figures_are_dropped() {
        let raw = r#"{"Year":[2021],"Revenue":["1000000"],"Net_Income":[10]}"#;
        assert!(parse_series(raw).is_empty());
    }

    #[test]
    fn test_payload_schema_lists_required_columns() {
        let schema = SeriesPayload::schema_as_json().unwrap();
        assert!(schema.contains("Year"));
        assert!(schema.contains("Revenue"));
        assert!(schema.contains("Net_Income"));
    }
}
