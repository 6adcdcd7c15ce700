//! Pricing decisions derived from trend signals.
//!
//! Fixed-threshold decision table, first match wins:
//! Uptrend with strength above 5 → Buy at 1.05, Downtrend with strength
//! below -5 → Sell at 0.95, anything else → Hold at 1.00. Thresholds are
//! strict inequalities.

use crate::domain::error::TradecycleError;
use crate::domain::trend::{TrendDirection, TrendSignal};
use std::fmt;
use std::str::FromStr;

/// Strength (signed percent) a trend must clear before Buy or Sell triggers.
pub const STRENGTH_THRESHOLD: f64 = 5.0;
pub const BUY_ADJUSTMENT: f64 = 1.05;
pub const SELL_ADJUSTMENT: f64 = 0.95;
pub const HOLD_ADJUSTMENT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "Buy"),
            Recommendation::Sell => write!(f, "Sell"),
            Recommendation::Hold => write!(f, "Hold"),
        }
    }
}

impl FromStr for Recommendation {
    type Err = TradecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" => Ok(Recommendation::Buy),
            "Sell" => Ok(Recommendation::Sell),
            "Hold" => Ok(Recommendation::Hold),
            other => Err(TradecycleError::InvalidSignal {
                value: other.to_string(),
            }),
        }
    }
}

/// Price adjustment and recommendation. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingDecision {
    pub adjustment_factor: f64,
    pub recommendation: Recommendation,
}

impl PricingDecision {
    /// Decision carrying the table's standard factor for `recommendation`.
    /// Used when a recommendation arrives from outside the strategist, e.g.
    /// a manually supplied trade.
    pub fn standard(recommendation: Recommendation) -> Self {
        let adjustment_factor = match recommendation {
            Recommendation::Buy => BUY_ADJUSTMENT,
            Recommendation::Sell => SELL_ADJUSTMENT,
            Recommendation::Hold => HOLD_ADJUSTMENT,
        };
        Self {
            adjustment_factor,
            recommendation,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PricingStrategist {
    /// Carried for configurability; not consulted by the decision table.
    pub risk_tolerance: f64,
}

impl PricingStrategist {
    /// `risk_tolerance` must lie in the open interval (0, 1).
    pub fn new(risk_tolerance: f64) -> Result<Self, TradecycleError> {
        if !(risk_tolerance > 0.0 && risk_tolerance < 1.0) {
            return Err(TradecycleError::PricingStrategy {
                reason: format!("risk tolerance {risk_tolerance} outside (0, 1)"),
            });
        }
        Ok(Self { risk_tolerance })
    }

    /// Maps a trend signal to a pricing decision. Pure and deterministic.
    pub fn determine_price(
        &self,
        signal: &TrendSignal,
    ) -> Result<PricingDecision, TradecycleError> {
        if !signal.strength.is_finite() {
            return Err(TradecycleError::InvalidInput {
                reason: format!("non-finite trend strength {}", signal.strength),
            });
        }

        let decision = if signal.direction == TrendDirection::Uptrend
            && signal.strength > STRENGTH_THRESHOLD
        {
            PricingDecision {
                adjustment_factor: BUY_ADJUSTMENT,
                recommendation: Recommendation::Buy,
            }
        } else if signal.direction == TrendDirection::Downtrend
            && signal.strength < -STRENGTH_THRESHOLD
        {
            PricingDecision {
                adjustment_factor: SELL_ADJUSTMENT,
                recommendation: Recommendation::Sell,
            }
        } else {
            PricingDecision {
                adjustment_factor: HOLD_ADJUSTMENT,
                recommendation: Recommendation::Hold,
            }
        };

        Ok(decision)
    }
}
