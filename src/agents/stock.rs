use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::data::MarketDataProvider;
use crate::error::StockDataError;
use crate::models::Bar;

/// Bars for one symbol, oldest first
#[derive(Clone, Debug, Serialize)]
pub struct PriceHistory {
    pub symbol: String,
    pub period: String,
    pub interval: String,
    pub bars: Vec<Bar>,
}

impl PriceHistory {
    pub fn new(symbol: &str, period: &str, interval: &str, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        Self {
            symbol: symbol.to_string(),
            period: period.to_string(),
            interval: interval.to_string(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    pub fn recent_return(&self, lookback: usize) -> Option<f64> {
        compute_recent_return(&self.bars, lookback)
    }
}

/// Percentage change of the close over the trailing `lookback` bars, as a
/// decimal (0.05 is +5%).
///
/// Needs `lookback + 1` bars in chronological order; returns `None` with
/// fewer, or when the starting close is zero.
pub fn compute_recent_return(bars: &[Bar], lookback: usize) -> Option<f64> {
    if bars.len() < lookback + 1 {
        return None;
    }
    let window = &bars[bars.len() - (lookback + 1)..];
    let start = window.first()?.close;
    let end = window.last()?.close;
    if start == 0.0 {
        return None;
    }
    Some((end - start) / start)
}

pub struct StockDataAgent {
    provider: Arc<dyn MarketDataProvider>,
}

impl StockDataAgent {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    pub async fn get_history(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<PriceHistory, StockDataError> {
        info!(
            "📈 Fetching price history for symbol={}, period={}, interval={} ({})",
            symbol,
            period,
            interval,
            self.provider.name()
        );

        let bars = self.provider.fetch(symbol, period, interval).await?;
        if bars.is_empty() {
            let err = StockDataError::NoData {
                symbol: symbol.to_string(),
                period: period.to_string(),
                interval: interval.to_string(),
            };
            error!("❌ {}", err);
            return Err(err);
        }

        info!("📈 Retrieved {} bars of price data", bars.len());
        Ok(PriceHistory::new(symbol, period, interval, bars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataResult;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};

    fn bars(closes: &[f64]) -> Vec<Bar> {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                timestamp: start + Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1_000,
            })
            .collect()
    }

    struct FixedProvider(Vec<Bar>);

    #[async_trait]
    impl MarketDataProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch(&self, _s: &str, _p: &str, _i: &str) -> DataResult<Vec<Bar>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_recent_return_exact() {
        assert_eq!(compute_recent_return(&bars(&[100.0, 105.0]), 1), Some(0.05));
    }

    #[test]
    fn test_recent_return_uses_trailing_window() {
        let history = bars(&[50.0, 80.0, 100.0, 90.0, 110.0]);
        // 100 -> 110 over the last 3 bars
        assert_eq!(compute_recent_return(&history, 2), Some((110.0 - 100.0) / 100.0));
    }

    #[test]
    fn test_recent_return_insufficient_history() {
        assert_eq!(compute_recent_return(&bars(&[]), 0), None);
        assert_eq!(compute_recent_return(&bars(&[1.0, 2.0, 3.0, 4.0, 5.0]), 5), None);
        assert!(compute_recent_return(&bars(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), 5).is_some());
    }

    #[test]
    fn test_recent_return_zero_start() {
        assert_eq!(compute_recent_return(&bars(&[0.0, 5.0]), 1), None);
    }

    #[test]
    fn test_history_sorted_on_construction() {
        let mut unordered = bars(&[1.0, 2.0, 3.0]);
        unordered.reverse();
        let history = PriceHistory::new("X", "5d", "1d", unordered);

        assert_eq!(history.last_close(), Some(3.0));
        assert_eq!(history.recent_return(2), Some(2.0));
    }

    #[tokio::test]
    async fn test_get_history_no_data() {
        let agent = StockDataAgent::new(Arc::new(FixedProvider(Vec::new())));
        match agent.get_history("ZZZZ", "1y", "1d").await.unwrap_err() {
            StockDataError::NoData { symbol, period, interval } => {
                assert_eq!(symbol, "ZZZZ");
                assert_eq!(period, "1y");
                assert_eq!(interval, "1d");
            }
            other => panic!("Expected NoData, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_history_ok() {
        let agent = StockDataAgent::new(Arc::new(FixedProvider(bars(&[10.0, 11.0]))));
        let history = agent.get_history("AAPL", "5d", "1d").await.unwrap();

        assert_eq!(history.symbol, "AAPL");
        assert_eq!(history.len(), 2);
        assert!(!history.is_empty());
    }
}
