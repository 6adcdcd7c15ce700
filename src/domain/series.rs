//! Price observation series.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTick {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: i64,
}

/// Ordered price observations for one symbol.
///
/// Append-only within a session: ticks can be pushed but never removed or
/// reordered by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    symbol: String,
    ticks: Vec<PriceTick>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, ticks: Vec<PriceTick>) -> Self {
        Self {
            symbol: symbol.into(),
            ticks,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn push(&mut self, tick: PriceTick) {
        self.ticks.push(tick);
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn ticks(&self) -> &[PriceTick] {
        &self.ticks
    }

    pub fn last_price(&self) -> Option<f64> {
        self.ticks.last().map(|t| t.price)
    }

    /// The most recent `n` ticks, oldest first. `None` when `n` is zero or
    /// exceeds the series length.
    pub fn trailing_window(&self, n: usize) -> Option<&[PriceTick]> {
        if n == 0 || n > self.ticks.len() {
            return None;
        }
        Some(&self.ticks[self.ticks.len() - n..])
    }
}
