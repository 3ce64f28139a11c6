pub mod traits;
pub mod yahoo;

pub use traits::{DataResult, MarketDataProvider};
pub use yahoo::YahooProvider;
