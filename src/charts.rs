//! Maps derived metrics onto the fixed pair of trend charts. Output is
//! declarative: the presentation collaborator draws, this module only
//! decides what ends up on each axis.

use crate::schema::{ChartBar, ChartSpec, DerivedMetrics, MetricPoint};

pub const REVENUE_GROWTH_CHART_TITLE: &str = "Revenue Growth Rate Over Time";
pub const PROFIT_MARGIN_CHART_TITLE: &str = "Profit Margin Over Time";
pub const YEAR_AXIS_LABEL: &str = "Year";
pub const GROWTH_AXIS_LABEL: &str = "Growth Rate (%)";
pub const MARGIN_AXIS_LABEL: &str = "Profit Margin (%)";

/// One bar chart per metric, each restricted to the years where the
/// metric is defined: the first year has no growth rate and is excluded
/// from that chart rather than shown as zero. A chart that would have no
/// bars is not emitted, so empty metrics produce zero charts.
pub fn render_charts(metrics: &DerivedMetrics) -> Vec<ChartSpec> {
    let mut charts = Vec::new();

    let growth = bars(metrics, |p| p.revenue_growth_rate);
    if !growth.is_empty() {
        charts.push(ChartSpec {
            title: REVENUE_GROWTH_CHART_TITLE.to_string(),
            x_label: YEAR_AXIS_LABEL.to_string(),
            y_label: GROWTH_AXIS_LABEL.to_string(),
            color: "blue".to_string(),
            bars: growth,
        });
    }

    let margin = bars(metrics, |p| p.profit_margin);
    if !margin.is_empty() {
        charts.push(ChartSpec {
            title: PROFIT_MARGIN_CHART_TITLE.to_string(),
            x_label: YEAR_AXIS_LABEL.to_string(),
            y_label: MARGIN_AXIS_LABEL.to_string(),
            color: "green".to_string(),
            bars: margin,
        });
    }

    charts
}

fn bars(metrics: &DerivedMetrics, metric: impl Fn(&MetricPoint) -> Option<f64>) -> Vec<ChartBar> {
    metrics
        .points
        .iter()
        .filter_map(|point| {
            metric(point).map(|value| ChartBar {
                year: point.year,
                value,
            })
        })
        .collect()
}
