//! Trend analysis over a trailing price window.
//!
//! strength = (average - last) / last * 100, signed percent.
//! direction = Uptrend when the trailing average sits above the last price,
//! Downtrend when below, Flat when equal.

use crate::domain::error::TradecycleError;
use crate::domain::series::PriceSeries;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Uptrend,
    Downtrend,
    Flat,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Uptrend => write!(f, "Uptrend"),
            TrendDirection::Downtrend => write!(f, "Downtrend"),
            TrendDirection::Flat => write!(f, "Flat"),
        }
    }
}

/// Trend over a trailing window. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSignal {
    pub direction: TrendDirection,
    pub strength: f64,
}

/// Computes the trend signal from the simple moving average of the most
/// recent `window_size` prices against the last price.
pub fn compute_trend(
    series: &PriceSeries,
    window_size: usize,
) -> Result<TrendSignal, TradecycleError> {
    if window_size == 0 {
        return Err(TradecycleError::TrendComputation {
            reason: "window size must be at least 1".into(),
        });
    }

    let window = series
        .trailing_window(window_size)
        .ok_or_else(|| TradecycleError::InsufficientData {
            have: series.len(),
            needed: window_size,
        })?;
    let average = window.iter().map(|t| t.price).sum::<f64>() / window_size as f64;
    let last = window[window_size - 1].price;

    if last == 0.0 {
        return Err(TradecycleError::TrendComputation {
            reason: "last price is zero".into(),
        });
    }

    let strength = (average - last) / last * 100.0;
    if !strength.is_finite() {
        return Err(TradecycleError::TrendComputation {
            reason: "non-finite price in window".into(),
        });
    }

    let direction = if average > last {
        TrendDirection::Uptrend
    } else if average < last {
        TrendDirection::Downtrend
    } else {
        TrendDirection::Flat
    };

    Ok(TrendSignal {
        direction,
        strength,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::PriceTick;
    use chrono::NaiveDate;

    fn make_series(prices: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let ticks = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PriceTick {
                date: start + chrono::Duration::days(i as i64),
                price,
                volume: 1000,
            })
            .collect();
        PriceSeries::new("ACME", ticks)
    }

    #[test]
    fn uptrend_when_average_above_last() {
        // average 100, last 90 → strength (100-90)/90*100 ≈ 11.11
        let series = make_series(&[105.0, 105.0, 100.0, 90.0]);
        let signal = compute_trend(&series, 4).unwrap();

        assert_eq!(signal.direction, TrendDirection::Uptrend);
        let expected = (100.0 - 90.0) / 90.0 * 100.0;
        assert!((signal.strength - expected).abs() < 1e-9);
        assert!(signal.strength > 0.0);
    }

    #[test]
    fn downtrend_when_average_below_last() {
        // average 90, last 100 → strength -10
        let series = make_series(&[85.0, 85.0, 90.0, 100.0]);
        let signal = compute_trend(&series, 4).unwrap();

        assert_eq!(signal.direction, TrendDirection::Downtrend);
        assert!((signal.strength - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn flat_when_average_equals_last() {
        let series = make_series(&[100.0, 100.0, 100.0]);
        let signal = compute_trend(&series, 3).unwrap();

        assert_eq!(signal.direction, TrendDirection::Flat);
        assert!((signal.strength - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn only_trailing_window_is_used() {
        // Leading 1000.0 lies outside the window of 2 and must not skew the mean.
        let series = make_series(&[1000.0, 100.0, 100.0]);
        let signal = compute_trend(&series, 2).unwrap();

        assert_eq!(signal.direction, TrendDirection::Flat);
    }

    #[test]
    fn insufficient_data() {
        let series = make_series(&[100.0, 101.0, 102.0]);
        let err = compute_trend(&series, 5).unwrap_err();

        assert!(matches!(
            err,
            TradecycleError::InsufficientData { have: 3, needed: 5 }
        ));
    }

    #[test]
    fn insufficient_data_empty_series() {
        let series = make_series(&[]);
        let err = compute_trend(&series, 1).unwrap_err();

        assert!(matches!(
            err,
            TradecycleError::InsufficientData { have: 0, needed: 1 }
        ));
    }

    #[test]
    fn zero_window_rejected() {
        let series = make_series(&[100.0]);
        let err = compute_trend(&series, 0).unwrap_err();

        assert!(matches!(err, TradecycleError::TrendComputation { .. }));
    }

    #[test]
    fn zero_last_price_rejected() {
        let series = make_series(&[100.0, 100.0, 0.0]);
        let err = compute_trend(&series, 3).unwrap_err();

        assert!(matches!(err, TradecycleError::TrendComputation { .. }));
    }

    #[test]
    fn non_finite_price_rejected() {
        let series = make_series(&[100.0, f64::NAN, 100.0]);
        let err = compute_trend(&series, 3).unwrap_err();

        assert!(matches!(err, TradecycleError::TrendComputation { .. }));
    }

    #[test]
    fn window_of_one_is_always_flat() {
        // Window of one: average equals the last price by construction.
        let series = make_series(&[100.0, 90.0]);
        let signal = compute_trend(&series, 1).unwrap();

        assert_eq!(signal.direction, TrendDirection::Flat);
        assert!((signal.strength - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn strength_sign_matches_direction() {
        let up = compute_trend(&make_series(&[110.0, 110.0, 90.0]), 3).unwrap();
        assert_eq!(up.direction, TrendDirection::Uptrend);
        assert!(up.strength > 0.0);

        let down = compute_trend(&make_series(&[90.0, 90.0, 110.0]), 3).unwrap();
        assert_eq!(down.direction, TrendDirection::Downtrend);
        assert!(down.strength < 0.0);
    }
}
