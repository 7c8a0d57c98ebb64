//! Turns a statement bundle into the single text blob the metrics-summary
//! prompt embeds. Absence is data here, not failure: whatever subset of
//! the three statements exists is concatenated, and nothing at all yields
//! an empty string.

use crate::schema::StatementBundle;

/// Flattens whatever subset of the bundle is present into one
/// prompt-ready blob. The three statements are appended in balance sheet,
/// cash flow, income statement order with no separator between them.
pub fn format_financials(bundle: Option<&StatementBundle>) -> String {
    let Some(bundle) = bundle else {
        return String::new();
    };

    let mut out = String::new();
    for table in [
        &bundle.balance_sheet,
        &bundle.cash_flow,
        &bundle.income_statement,
    ]
    .into_iter()
    .flatten()
    {
        out.push_str(&table.render());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{StatementRow, StatementTable};

    fn table(name: &str) -> StatementTable {
        StatementTable {
            name: name.to_string(),
            periods: vec!["2023".to_string()],
            rows: vec![StatementRow {
                label: "Total".to_string(),
                values: vec![Some(1.0)],
            }],
        }
    }

    #[test]
    fn test_full_bundle_length_is_sum_of_parts() {
        let bundle = StatementBundle {
            balance_sheet: Some(table("Balance Sheet")),
            cash_flow: Some(table("Cash Flow Statement")),
            income_statement: Some(table("Income Statement")),
        };

        let expected_len = bundle.balance_sheet.as_ref().unwrap().render().len()
            + bundle.cash_flow.as_ref().unwrap().render().len()
            + bundle.income_statement.as_ref().unwrap().render().len();

        assert_eq!(format_financials(Some(&bundle)).len(), expected_len);
    }

    #[test]
    fn test_partial_bundle_keeps_available_statements() {
        let bundle = StatementBundle {
            balance_sheet: None,
            cash_flow: Some(table("Cash Flow Statement")),
            income_statement: None,
        };

        let text = format_financials(Some(&bundle));
        assert!(text.starts_with("Cash Flow Statement"));
        assert_eq!(text.len(), bundle.cash_flow.as_ref().unwrap().render().len());
    }

    #[test]
    fn test_absent_bundle_yields_empty_string() {
        assert_eq!(format_financials(None), "");
        assert_eq!(format_financials(Some(&StatementBundle::default())), "");
    }
}
