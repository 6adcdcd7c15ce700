//! Seeded random-walk market data adapter.
//!
//! Stands in for a live data feed; the same seed always reproduces the same
//! series.

use crate::domain::error::TradecycleError;
use crate::domain::series::{PriceSeries, PriceTick};
use crate::ports::data_port::MarketDataPort;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STARTING_PRICE: f64 = 100.0;
const PRICE_FLOOR: f64 = 0.01;

pub struct SimulatedDataAdapter {
    seed: u64,
    observations: usize,
}

impl SimulatedDataAdapter {
    pub fn new(seed: u64, observations: usize) -> Self {
        Self { seed, observations }
    }
}

impl MarketDataPort for SimulatedDataAdapter {
    fn fetch(&self, symbol: &str) -> Result<PriceSeries, TradecycleError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut ticks = Vec::with_capacity(self.observations);
        let mut price = STARTING_PRICE;
        let mut date = NaiveDate::default();

        for _ in 0..self.observations {
            price = (price + rng.gen_range(-1.0..1.0)).max(PRICE_FLOOR);
            let volume: i64 = rng.gen_range(100..10_000);
            ticks.push(PriceTick {
                date,
                price,
                volume,
            });
            date = date.succ_opt().unwrap_or(date);
        }

        Ok(PriceSeries::new(symbol, ticks))
    }
}
