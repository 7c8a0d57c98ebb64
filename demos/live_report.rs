use async_trait::async_trait;
use dotenv::dotenv;
use finalyzer::{
    CompanyHandle, FilingDocument, FilingRef, FilingsClient, FilingsError, GeminiClient,
    ReportEngine, StatementBundle, StatementRow, StatementTable,
};

// Canned filings data standing in for a real retrieval service, so the
// demo exercises the pipeline against a live Gemini session without
// talking to a regulator API.
const RISK_FACTORS: &str = "\
The company depends on a small number of large customers. Losing any one
of them would materially reduce revenue. Competition in the sector is
intensifying and pricing pressure is expected to continue. Supply chain
disruptions have previously delayed shipments by up to a quarter.";

const MDNA: &str = "\
Management expects mid single digit revenue growth next year, driven by
the new subscription line. Gross margin should stay flat while the
company invests in fulfilment capacity. The board remains optimistic
about long term demand.";

struct CannedFilings;

#[async_trait]
impl FilingsClient for CannedFilings {
    async fn lookup(&self, ticker: &str) -> Result<Box<dyn CompanyHandle>, FilingsError> {
        if ticker != "ACME" {
            return Err(FilingsError::NotFound(ticker.to_string()));
        }
        Ok(Box::new(CannedCompany))
    }
}

struct CannedCompany;

#[async_trait]
impl CompanyHandle for CannedCompany {
    fn financials(&self) -> Option<StatementBundle> {
        let table = |name: &str, rows: Vec<(&str, [f64; 2])>| StatementTable {
            name: name.to_string(),
            periods: vec!["2023".to_string(), "2022".to_string()],
            rows: rows
                .into_iter()
                .map(|(label, values)| StatementRow {
                    label: label.to_string(),
                    values: values.iter().copied().map(Some).collect(),
                })
                .collect(),
        };

        Some(StatementBundle {
            balance_sheet: Some(table(
                "Balance Sheet",
                vec![
                    ("Total assets", [1_250_000.0, 1_100_000.0]),
                    ("Total liabilities", [480_000.0, 430_000.0]),
                ],
            )),
            cash_flow: Some(table(
                "Cash Flow Statement",
                vec![("Net operating cash", [210_000.0, 160_000.0])],
            )),
            income_statement: Some(table(
                "Income Statement",
                vec![
                    ("Revenue", [1_500_000.0, 1_200_000.0]),
                    ("Net income", [400_000.0, 300_000.0]),
                ],
            )),
        })
    }

    async fn filings(&self, _form: &str) -> Result<Vec<Box<dyn FilingRef>>, FilingsError> {
        Ok(vec![Box::new(CannedFiling)])
    }
}

struct CannedFiling;

#[async_trait]
impl FilingRef for CannedFiling {
    async fn document(&self) -> Result<FilingDocument, FilingsError> {
        Ok(FilingDocument::new()
            .with_section("Item 1A", RISK_FACTORS)
            .with_section("Item 7", MDNA))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let api_key = std::env::var("GOOGLE_API_KEY")
        .map_err(|_| anyhow::anyhow!("GOOGLE_API_KEY is not set"))?;

    let engine = ReportEngine::new(CannedFilings, GeminiClient::new(api_key));
    let report = engine.build_report("ACME").await;

    for section in report.sections.iter().filter(|s| s.is_present()) {
        println!("\n== {} ==", section.title);
        println!("{}", section.body.as_deref().unwrap_or_default());
    }

    if report.charts.is_empty() {
        println!("\n(no chartable series extracted)");
    }
    for chart in &report.charts {
        println!("\n{} [{} / {}]", chart.title, chart.x_label, chart.y_label);
        for bar in &chart.bars {
            println!("  {}: {:>8.2}", bar.year, bar.value);
        }
    }

    Ok(())
}
