//! Account state and trade history.

use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "Buy"),
            TradeAction::Sell => write!(f, "Sell"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeRecord {
    pub action: TradeAction,
    pub executed_at: DateTime<Utc>,
}

/// Balance plus executed-trade history.
///
/// History is append-only: entries are never removed or reordered. Only
/// [`crate::domain::agent::TradingAgent`] mutates the balance.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountState {
    pub balance: f64,
    history: Vec<TradeRecord>,
}

impl AccountState {
    pub fn new(initial_balance: f64) -> Self {
        Self {
            balance: initial_balance,
            history: Vec::new(),
        }
    }

    pub fn record_trade(&mut self, action: TradeAction, executed_at: DateTime<Utc>) {
        self.history.push(TradeRecord {
            action,
            executed_at,
        });
    }

    pub fn history(&self) -> &[TradeRecord] {
        &self.history
    }

    pub fn trade_count(&self) -> usize {
        self.history.len()
    }
}
