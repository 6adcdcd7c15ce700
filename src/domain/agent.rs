//! Simulated trade execution against the in-memory account.

use crate::domain::account::{AccountState, TradeAction};
use crate::domain::error::TradecycleError;
use crate::domain::pricing::{PricingDecision, Recommendation};
use crate::ports::clock_port::TimeSource;

/// Result of one executed decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeOutcome {
    pub recommendation: Recommendation,
    pub balance: f64,
}

pub struct TradingAgent {
    /// Credential for a real venue. The simulated executor never transmits it.
    pub api_key: String,
}

impl TradingAgent {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Applies `decision` to `state`: Buy and Sell scale the balance by the
    /// adjustment factor and append a history entry, Hold leaves the account
    /// untouched. Validation happens before any mutation, so an error leaves
    /// `state` unchanged.
    pub fn execute_trade(
        &self,
        state: &mut AccountState,
        decision: &PricingDecision,
        clock: &dyn TimeSource,
    ) -> Result<TradeOutcome, TradecycleError> {
        let factor = decision.adjustment_factor;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TradecycleError::TradingExecution {
                reason: format!("adjustment factor {factor} is not a positive finite ratio"),
            });
        }

        match decision.recommendation {
            Recommendation::Buy => {
                state.balance *= factor;
                state.record_trade(TradeAction::Buy, clock.now());
            }
            Recommendation::Sell => {
                state.balance *= factor;
                state.record_trade(TradeAction::Sell, clock.now());
            }
            Recommendation::Hold => {}
        }

        Ok(TradeOutcome {
            recommendation: decision.recommendation,
            balance: state.balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct FixedClock(DateTime<Utc>);

    impl TimeSource for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    }

    fn decision(factor: f64, recommendation: Recommendation) -> PricingDecision {
        PricingDecision {
            adjustment_factor: factor,
            recommendation,
        }
    }

    #[test]
    fn buy_scales_balance_and_records() {
        let agent = TradingAgent::new("test-key");
        let mut state = AccountState::new(1000.0);

        let outcome = agent
            .execute_trade(&mut state, &decision(1.05, Recommendation::Buy), &clock())
            .unwrap();

        assert!((outcome.balance - 1050.0).abs() < 1e-9);
        assert!((state.balance - 1050.0).abs() < 1e-9);
        assert_eq!(state.trade_count(), 1);
        assert_eq!(state.history()[0].action, TradeAction::Buy);
        assert_eq!(state.history()[0].executed_at, clock().0);
    }

    #[test]
    fn sell_scales_balance_and_records() {
        let agent = TradingAgent::new("test-key");
        let mut state = AccountState::new(1000.0);

        let outcome = agent
            .execute_trade(&mut state, &decision(0.95, Recommendation::Sell), &clock())
            .unwrap();

        assert!((outcome.balance - 950.0).abs() < 1e-9);
        assert_eq!(state.history()[0].action, TradeAction::Sell);
    }

    #[test]
    fn hold_leaves_account_untouched() {
        let agent = TradingAgent::new("test-key");
        let mut state = AccountState::new(1000.0);

        let outcome = agent
            .execute_trade(&mut state, &decision(1.0, Recommendation::Hold), &clock())
            .unwrap();

        assert_eq!(outcome.recommendation, Recommendation::Hold);
        assert!((state.balance - 1000.0).abs() < f64::EPSILON);
        assert_eq!(state.trade_count(), 0);
    }

    #[test]
    fn repeated_trades_compound() {
        let agent = TradingAgent::new("test-key");
        let mut state = AccountState::new(1000.0);
        let buy = decision(1.05, Recommendation::Buy);

        agent.execute_trade(&mut state, &buy, &clock()).unwrap();
        agent.execute_trade(&mut state, &buy, &clock()).unwrap();

        assert!((state.balance - 1000.0 * 1.05 * 1.05).abs() < 1e-9);
        assert_eq!(state.trade_count(), 2);
    }

    #[test]
    fn non_positive_factor_rejected_without_mutation() {
        let agent = TradingAgent::new("test-key");
        let mut state = AccountState::new(1000.0);

        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = agent
                .execute_trade(&mut state, &decision(factor, Recommendation::Buy), &clock())
                .unwrap_err();
            assert!(matches!(err, TradecycleError::TradingExecution { .. }));
        }

        assert!((state.balance - 1000.0).abs() < f64::EPSILON);
        assert_eq!(state.trade_count(), 0);
    }

    #[test]
    fn balance_stays_positive_under_repeated_sells() {
        let agent = TradingAgent::new("test-key");
        let mut state = AccountState::new(1000.0);
        let sell = decision(0.95, Recommendation::Sell);

        for _ in 0..200 {
            agent.execute_trade(&mut state, &sell, &clock()).unwrap();
        }

        assert!(state.balance > 0.0);
        assert_eq!(state.trade_count(), 200);
    }
}
