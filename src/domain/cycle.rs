//! One full trading cycle: fetch, analyze, price, execute.

use crate::domain::account::AccountState;
use crate::domain::agent::{TradeOutcome, TradingAgent};
use crate::domain::error::TradecycleError;
use crate::domain::pricing::{PricingDecision, PricingStrategist};
use crate::domain::trend::{compute_trend, TrendSignal};
use crate::ports::clock_port::TimeSource;
use crate::ports::data_port::MarketDataPort;

/// Everything one cycle produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub signal: TrendSignal,
    pub decision: PricingDecision,
    pub outcome: TradeOutcome,
}

/// Runs one synchronous pass over the pipeline. An error at any stage aborts
/// the cycle and leaves `state` exactly as it was when the cycle began.
/// Callers running repeated cycles must serialize them.
pub fn run_cycle(
    source: &dyn MarketDataPort,
    symbol: &str,
    window_size: usize,
    strategist: &PricingStrategist,
    agent: &TradingAgent,
    state: &mut AccountState,
    clock: &dyn TimeSource,
) -> Result<CycleReport, TradecycleError> {
    let series = source.fetch(symbol)?;
    let signal = compute_trend(&series, window_size)?;
    let decision = strategist.determine_price(&signal)?;
    let outcome = agent.execute_trade(state, &decision, clock)?;

    Ok(CycleReport {
        signal,
        decision,
        outcome,
    })
}
