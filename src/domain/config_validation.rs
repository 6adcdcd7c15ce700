//! Configuration validation.
//!
//! Validates all trading config fields before a cycle runs.

use crate::domain::error::TradecycleError;
use crate::ports::config_port::ConfigPort;

pub fn validate_trading_config(config: &dyn ConfigPort) -> Result<(), TradecycleError> {
    validate_data_source(config)?;
    validate_symbol(config)?;
    validate_window_size(config)?;
    validate_risk_tolerance(config)?;
    validate_balance(config)?;
    validate_api_key(config)?;
    Ok(())
}

fn validate_data_source(config: &dyn ConfigPort) -> Result<(), TradecycleError> {
    let source = match config.get_string("market", "data_source") {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return Err(TradecycleError::ConfigMissing {
                section: "market".to_string(),
                key: "data_source".to_string(),
            })
        }
    };

    match source.as_str() {
        "csv" => match config.get_string("market", "csv_dir") {
            Some(dir) if !dir.trim().is_empty() => Ok(()),
            _ => Err(TradecycleError::ConfigMissing {
                section: "market".to_string(),
                key: "csv_dir".to_string(),
            }),
        },
        "simulated" => {
            let observations = config.get_int("market", "observations", 100);
            if observations < 1 {
                return Err(TradecycleError::ConfigInvalid {
                    section: "market".to_string(),
                    key: "observations".to_string(),
                    reason: "observations must be at least 1".to_string(),
                });
            }
            Ok(())
        }
        other => Err(TradecycleError::ConfigInvalid {
            section: "market".to_string(),
            key: "data_source".to_string(),
            reason: format!("unknown data source '{other}' (expected csv or simulated)"),
        }),
    }
}

fn validate_symbol(config: &dyn ConfigPort) -> Result<(), TradecycleError> {
    match config.get_string("market", "symbol") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TradecycleError::ConfigMissing {
            section: "market".to_string(),
            key: "symbol".to_string(),
        }),
    }
}

fn validate_window_size(config: &dyn ConfigPort) -> Result<(), TradecycleError> {
    let value = config.get_int("market", "window_size", 20);
    if value < 1 {
        return Err(TradecycleError::ConfigInvalid {
            section: "market".to_string(),
            key: "window_size".to_string(),
            reason: "window_size must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_risk_tolerance(config: &dyn ConfigPort) -> Result<(), TradecycleError> {
    let value = config.get_double("strategy", "risk_tolerance", 0.05);
    if value <= 0.0 || value >= 1.0 {
        return Err(TradecycleError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "risk_tolerance".to_string(),
            reason: "risk_tolerance must be between 0 and 1 exclusive".to_string(),
        });
    }
    Ok(())
}

fn validate_balance(config: &dyn ConfigPort) -> Result<(), TradecycleError> {
    let value = config.get_double("account", "balance", 1000.0);
    if value <= 0.0 {
        return Err(TradecycleError::ConfigInvalid {
            section: "account".to_string(),
            key: "balance".to_string(),
            reason: "balance must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_api_key(config: &dyn ConfigPort) -> Result<(), TradecycleError> {
    match config.get_string("account", "api_key") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TradecycleError::ConfigMissing {
            section: "account".to_string(),
            key: "api_key".to_string(),
        }),
    }
}
