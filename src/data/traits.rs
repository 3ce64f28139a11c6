use async_trait::async_trait;

use crate::error::StockDataError;
use crate::models::Bar;

pub type DataResult<T> = Result<T, StockDataError>;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Bars for `symbol` over `period` sampled at `interval`.
    /// An empty vector is a valid answer; the caller decides what it means.
    async fn fetch(&self, symbol: &str, period: &str, interval: &str) -> DataResult<Vec<Bar>>;
}
