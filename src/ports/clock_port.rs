//! Time source port trait.
//!
//! Injected into the trading agent so execution timestamps never come from
//! ambient global state.

use chrono::{DateTime, Utc};

pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}
