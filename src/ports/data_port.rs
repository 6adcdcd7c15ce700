//! Market data port trait.

use crate::domain::error::TradecycleError;
use crate::domain::series::PriceSeries;

pub trait MarketDataPort {
    fn fetch(&self, symbol: &str) -> Result<PriceSeries, TradecycleError>;
}
