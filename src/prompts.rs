//! Prompt templates for the four model tasks, plus the excerpt bounds the
//! risk and outlook prompts are cut to. The bounds are cost trade-offs,
//! not context-window limits; they are kept at the historical values so
//! reports stay comparable across versions.

pub const METRICS_SUMMARY_INSTRUCTION: &str = "Using the below dataframes calculate: \
every Income Statement Metrics, Cash Flow Statement Metrics and Balance Sheet Metrics only \
which is to be discussed in a c-suite meeting";

pub const RISK_FACTORS_INSTRUCTION: &str = "Below is the risk factors section from a 10-K \
document. Give all the risk factors in brief a financial investor should consider before \
investing in the company.";

pub const OUTLOOK_INSTRUCTION: &str = "You have been provided the management discussion and \
analysis for a company. What is the company's outlook for next year? Are they optimistic \
about growth?";

/// Fixed-format extraction instruction; the embedded example shows the
/// model the exact shape to produce. The reply is expected to be a bare
/// JSON string, though the extractor tolerates fence noise anyway.
pub const SERIES_EXTRACTION_INSTRUCTION: &str = r#"Retrieve Year, revenue, net income from previous information. response should only contain a valid
JSON string and nothing else. The format of the string should be:
{
"Year": [2021, 2022, 2023],
"Revenue": [1000000, 1200000, 1500000],
"Net_Income": [200000, 300000, 400000]
}"#;

/// Character cap on the risk-factors excerpt.
pub const RISK_EXCERPT_LIMIT: usize = 15_000;

/// Character cap on the outlook excerpt.
pub const OUTLOOK_EXCERPT_LIMIT: usize = 20_000;

/// An instruction plus the source excerpt it is asked about. Prompts are
/// built fresh for every request and composed right before sending.
#[derive(Debug, Clone)]
pub struct Prompt {
    instruction: &'static str,
    excerpt: String,
}

impl Prompt {
    /// Prompt over the full excerpt, no length bound.
    pub fn new(instruction: &'static str, excerpt: &str) -> Self {
        Self {
            instruction,
            excerpt: excerpt.to_string(),
        }
    }

    /// Prompt whose excerpt is cut to at most `limit` characters. The cut
    /// is a plain character count at a char boundary, never
    /// paragraph-aware.
    pub fn bounded(instruction: &'static str, excerpt: &str, limit: usize) -> Self {
        Self {
            instruction,
            excerpt: truncate_chars(excerpt, limit),
        }
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// The string actually sent: instruction immediately followed by the
    /// excerpt.
    pub fn compose(&self) -> String {
        format!("{}{}", self.instruction, self.excerpt)
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_is_min_of_len_and_bound() {
        let text = "a".repeat(100);

        let short = Prompt::bounded(RISK_FACTORS_INSTRUCTION, &text, 40);
        assert_eq!(short.excerpt().chars().count(), 40);

        let long = Prompt::bounded(RISK_FACTORS_INSTRUCTION, &text, 500);
        assert_eq!(long.excerpt().chars().count(), 100);

        let zero = Prompt::bounded(RISK_FACTORS_INSTRUCTION, &text, 0);
        assert_eq!(zero.excerpt(), "");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let text = "日本語のテキスト";
        let prompt = Prompt::bounded(OUTLOOK_INSTRUCTION, text, 3);
        assert_eq!(prompt.excerpt(), "日本語");
    }

    #[test]
    fn test_compose_concatenates_without_separator() {
        let prompt = Prompt::new(METRICS_SUMMARY_INSTRUCTION, "balance sheet text");
        assert_eq!(
            prompt.compose(),
            format!("{METRICS_SUMMARY_INSTRUCTION}balance sheet text")
        );
    }

    #[test]
    fn test_unbounded_prompt_keeps_full_excerpt() {
        let text = "x".repeat(50_000);
        let prompt = Prompt::new(METRICS_SUMMARY_INSTRUCTION, &text);
        assert_eq!(prompt.excerpt().len(), 50_000);
    }
}
