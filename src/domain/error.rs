//! Domain error types.

/// Top-level error type for tradecycle.
///
/// Each pipeline stage returns only its own kinds; nothing is rewrapped or
/// swallowed. A failed stage aborts the current cycle.
#[derive(Debug, thiserror::Error)]
pub enum TradecycleError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("market data error: {reason}")]
    MarketData { reason: String },

    #[error("insufficient data: have {have} observations, need {needed}")]
    InsufficientData { have: usize, needed: usize },

    #[error("trend computation error: {reason}")]
    TrendComputation { reason: String },

    #[error("invalid pricing input: {reason}")]
    InvalidInput { reason: String },

    #[error("pricing strategy error: {reason}")]
    PricingStrategy { reason: String },

    #[error("invalid trading signal: {value}")]
    InvalidSignal { value: String },

    #[error("trade execution error: {reason}")]
    TradingExecution { reason: String },
}

impl From<&TradecycleError> for std::process::ExitCode {
    fn from(err: &TradecycleError) -> Self {
        let code: u8 = match err {
            TradecycleError::ConfigParse { .. }
            | TradecycleError::ConfigMissing { .. }
            | TradecycleError::ConfigInvalid { .. } => 2,
            TradecycleError::MarketData { .. } => 3,
            TradecycleError::InsufficientData { .. }
            | TradecycleError::TrendComputation { .. } => 4,
            TradecycleError::InvalidInput { .. } | TradecycleError::PricingStrategy { .. } => 5,
            TradecycleError::InvalidSignal { .. } | TradecycleError::TradingExecution { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}
