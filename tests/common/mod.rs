#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use tradecycle::domain::error::TradecycleError;
pub use tradecycle::domain::series::{PriceSeries, PriceTick};
use tradecycle::ports::clock_port::TimeSource;
use tradecycle::ports::data_port::MarketDataPort;

pub struct MockMarketDataPort {
    pub series: HashMap<String, PriceSeries>,
    pub errors: HashMap<String, String>,
}

impl MockMarketDataPort {
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, symbol: &str, series: PriceSeries) -> Self {
        self.series.insert(symbol.to_string(), series);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn fetch(&self, symbol: &str) -> Result<PriceSeries, TradecycleError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(TradecycleError::MarketData {
                reason: reason.clone(),
            });
        }
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| TradecycleError::MarketData {
                reason: format!("no data for {symbol}"),
            })
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

pub fn make_tick(date: NaiveDate, price: f64) -> PriceTick {
    PriceTick {
        date,
        price,
        volume: 1000,
    }
}

/// Series with sequential dates starting 2024-01-01.
pub fn make_series(symbol: &str, prices: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let ticks = prices
        .iter()
        .enumerate()
        .map(|(i, &price)| make_tick(start + chrono::Duration::days(i as i64), price))
        .collect();
    PriceSeries::new(symbol, ticks)
}

/// 20 prices whose mean is `mean` and whose last element is `last`:
/// eighteen at `mean`, one balancing value, then `last`.
pub fn series_with_mean_and_last(symbol: &str, mean: f64, last: f64) -> PriceSeries {
    let balance = mean * 20.0 - mean * 18.0 - last;
    let mut prices = vec![mean; 18];
    prices.push(balance);
    prices.push(last);
    make_series(symbol, &prices)
}
