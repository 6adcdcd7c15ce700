//! CSV file market data adapter.
//!
//! One `{symbol}.csv` per symbol with `date,price,volume` columns; the
//! volume column may be absent.

use crate::domain::error::TradecycleError;
use crate::domain::series::{PriceSeries, PriceTick};
use crate::ports::data_port::MarketDataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvDataAdapter {
    base_path: PathBuf,
}

impl CsvDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{symbol}.csv"))
    }
}

impl MarketDataPort for CsvDataAdapter {
    fn fetch(&self, symbol: &str) -> Result<PriceSeries, TradecycleError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| TradecycleError::MarketData {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut ticks = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| TradecycleError::MarketData {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| TradecycleError::MarketData {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                TradecycleError::MarketData {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let price: f64 = record
                .get(1)
                .ok_or_else(|| TradecycleError::MarketData {
                    reason: "missing price column".into(),
                })?
                .parse()
                .map_err(|e| TradecycleError::MarketData {
                    reason: format!("invalid price value: {}", e),
                })?;

            let volume: i64 = match record.get(2) {
                Some(v) if !v.is_empty() => {
                    v.parse().map_err(|e| TradecycleError::MarketData {
                        reason: format!("invalid volume value: {}", e),
                    })?
                }
                _ => 0,
            };

            ticks.push(PriceTick {
                date,
                price,
                volume,
            });
        }

        ticks.sort_by_key(|t| t.date);
        Ok(PriceSeries::new(symbol, ticks))
    }
}
