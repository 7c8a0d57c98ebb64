//! Derives the two chartable ratios from a validated series. Pure and
//! infallible: an undefined ratio is omitted for that year, never zeroed
//! and never an error.

use crate::schema::{DerivedMetrics, ExtractedSeries, MetricPoint};

/// Growth is percent change against the prior year, so the first point
/// never carries one (nor does a point whose prior-year revenue is zero).
/// Margin is net income over revenue in percent, omitted when revenue is
/// zero.
pub fn derive_metrics(series: &ExtractedSeries) -> DerivedMetrics {
    let points = series
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let revenue_growth_rate = i
                .checked_sub(1)
                .map(|prev| series.points[prev].revenue)
                .filter(|prior| *prior != 0.0)
                .map(|prior| (point.revenue - prior) / prior * 100.0);

            let profit_margin =
                (point.revenue != 0.0).then(|| point.net_income / point.revenue * 100.0);

            MetricPoint {
                year: point.year,
                revenue: point.revenue,
                net_income: point.net_income,
                revenue_growth_rate,
                profit_margin,
            }
        })
        .collect();

    DerivedMetrics { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SeriesPoint;

    fn series(points: &[(i32, f64, f64)]) -> ExtractedSeries {
        ExtractedSeries {
            points: points
                .iter()
                .map(|&(year, revenue, net_income)| SeriesPoint {
                    year,
                    revenue,
                    net_income,
                })
                .collect(),
        }
    }

    #[test]
    fn test_growth_and_margin_boundaries() {
        let metrics = derive_metrics(&series(&[(2021, 100.0, 10.0), (2022, 150.0, 20.0)]));

        assert_eq!(metrics.points[0].revenue_growth_rate, None);
        assert_eq!(metrics.points[1].revenue_growth_rate, Some(50.0));

        assert_eq!(metrics.points[0].profit_margin, Some(10.0));
        let margin = metrics.points[1].profit_margin.unwrap();
        assert!((margin - 13.333333333333334).abs() < 1e-9);
    }

    #[test]
    fn test_zero_revenue_omits_margin() {
        let metrics = derive_metrics(&series(&[(2021, 0.0, 5.0)]));
        assert_eq!(metrics.points[0].profit_margin, None);
        assert_eq!(metrics.points[0].revenue_growth_rate, None);
    }

    #[test]
    fn test_zero_prior_revenue_omits_growth() {
        let metrics = derive_metrics(&series(&[(2021, 0.0, 0.0), (2022, 150.0, 20.0)]));
        assert_eq!(metrics.points[1].revenue_growth_rate, None);
        assert!(metrics.points[1].profit_margin.is_some());
    }

    #[test]
    fn test_short_series() {
        assert!(derive_metrics(&ExtractedSeries::default()).is_empty());

        let single = derive_metrics(&series(&[(2023, 200.0, 40.0)]));
        assert_eq!(single.points.len(), 1);
        assert_eq!(single.points[0].revenue_growth_rate, None);
        assert_eq!(single.points[0].profit_margin, Some(20.0));
    }

    #[test]
    fn test_negative_growth() {
        let metrics = derive_metrics(&series(&[(2021, 200.0, 10.0), (2022, 100.0, -5.0)]));
        assert_eq!(metrics.points[1].revenue_growth_rate, Some(-50.0));
        assert_eq!(metrics.points[1].profit_margin, Some(-5.0));
    }
}
