//! Placeholder exchange rate trend data.
//!
//! These series are fixed sample values, not historical rates. Fetching real
//! history would need its own provider.

use super::currency::CurrencyCode;

pub const TREND_DAYS: usize = 7;

const FALLBACK_CURRENCY: &str = "USD";

const PLACEHOLDER_SERIES: &[(&str, [f64; TREND_DAYS])] = &[
    ("USD", [1.0, 0.95, 0.97, 0.96, 0.94, 0.93, 0.92]),
    ("EUR", [0.89, 0.88, 0.87, 0.86, 0.85, 0.84, 0.83]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub rate: f64,
}

#[derive(Debug, Clone)]
pub struct TrendSeries {
    pub currency: CurrencyCode,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn title(&self) -> String {
        format!("Exchange Rate Trend for {}", self.currency)
    }

    /// Returns `(min, max)` over the series rates.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.rate).fold(None, |acc, r| match acc {
            None => Some((r, r)),
            Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
        })
    }
}

/// Placeholder trend for `target`, using the USD series for any currency
/// without its own sample data.
pub fn trend_for(target: &CurrencyCode) -> TrendSeries {
    let rates = PLACEHOLDER_SERIES
        .iter()
        .find(|(code, _)| *code == target.as_str())
        .or_else(|| {
            PLACEHOLDER_SERIES
                .iter()
                .find(|(code, _)| *code == FALLBACK_CURRENCY)
        })
        .map(|(_, rates)| *rates)
        .unwrap_or([1.0; TREND_DAYS]);

    let points = rates
        .iter()
        .enumerate()
        .map(|(i, rate)| TrendPoint {
            label: format!("Day {}", i + 1),
            rate: *rate,
        })
        .collect();

    TrendSeries {
        currency: target.clone(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eur_series() {
        let series = trend_for(&"eur".parse().unwrap());
        assert_eq!(series.points.len(), TREND_DAYS);
        assert_eq!(series.points[0].label, "Day 1");
        assert_eq!(series.points[6].label, "Day 7");
        assert_eq!(series.points[0].rate, 0.89);
        assert_eq!(series.points[6].rate, 0.83);
        assert_eq!(series.title(), "Exchange Rate Trend for EUR");
    }

    #[test]
    fn test_unknown_currency_falls_back_to_usd_series() {
        let series = trend_for(&"INR".parse().unwrap());
        let rates: Vec<f64> = series.points.iter().map(|p| p.rate).collect();
        assert_eq!(rates, vec![1.0, 0.95, 0.97, 0.96, 0.94, 0.93, 0.92]);
        // Title still names the requested currency
        assert_eq!(series.title(), "Exchange Rate Trend for INR");
    }

    #[test]
    fn test_bounds() {
        let series = trend_for(&"USD".parse().unwrap());
        assert_eq!(series.bounds(), Some((0.92, 1.0)));

        let empty = TrendSeries {
            currency: "USD".parse().unwrap(),
            points: vec![],
        };
        assert_eq!(empty.bounds(), None);
    }
}
