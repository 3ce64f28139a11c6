use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;
use yahoo_finance_api as yahoo;

use super::traits::{DataResult, MarketDataProvider};
use crate::error::StockDataError;
use crate::models::Bar;

/// Fragments of the chart API's answers for unknown or delisted symbols and
/// empty ranges. Those mean "zero bars", not a provider failure.
const NO_DATA_MARKERS: &[&str] = &[
    "not found",
    "no data found",
    "delisted",
    "no quotes",
    "no result",
    "empty data",
];

pub fn is_no_data_error(message: &str) -> bool {
    let lower = message.to_lowercase();
    NO_DATA_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Yahoo Finance chart API. No API key required.
#[derive(Clone, Default)]
pub struct YahooProvider;

impl YahooProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    async fn fetch(&self, symbol: &str, period: &str, interval: &str) -> DataResult<Vec<Bar>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| StockDataError::Provider(e.to_string()))?;

        let response = match provider.get_quote_range(symbol, interval, period).await {
            Ok(response) => response,
            Err(e) if is_no_data_error(&e.to_string()) => {
                warn!("Yahoo has no data for {}: {}", symbol, e);
                return Ok(Vec::new());
            }
            Err(e) => return Err(StockDataError::Provider(e.to_string())),
        };

        // The chart API reports an empty range as an error on the quotes accessor
        let quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Yahoo returned no usable quotes for {}: {}", symbol, e);
                return Ok(Vec::new());
            }
        };

        let bars = quotes
            .into_iter()
            .filter_map(|q| {
                let timestamp = DateTime::<Utc>::from_timestamp(q.timestamp as i64, 0)?;
                Some(Bar {
                    timestamp,
                    open: q.open,
                    high: q.high,
                    low: q.low,
                    close: q.close,
                    volume: q.volume,
                })
            })
            .collect();

        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_symbol_answers_are_no_data() {
        assert!(is_no_data_error("Not Found: No data found, symbol may be delisted"));
        assert!(is_no_data_error("fetching the data from yahoo! finance failed: No Result"));
        assert!(is_no_data_error("Yahoo! finance returned an empty data set"));
        assert!(is_no_data_error("no quotes found"));
    }

    #[test]
    fn test_transport_failures_are_not_no_data() {
        assert!(!is_no_data_error("error sending request: connection refused"));
        assert!(!is_no_data_error("HTTP 429 Too Many Requests"));
        assert!(!is_no_data_error("deserializing response failed"));
    }
}
