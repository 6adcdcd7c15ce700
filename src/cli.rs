//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_data_adapter::CsvDataAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
#[cfg(feature = "sim")]
use crate::adapters::sim_data_adapter::SimulatedDataAdapter;
use crate::adapters::system_clock::SystemClock;
use crate::domain::account::AccountState;
use crate::domain::agent::TradingAgent;
use crate::domain::config_validation::validate_trading_config;
use crate::domain::cycle as cycle_engine;
use crate::domain::error::TradecycleError;
use crate::domain::pricing::{PricingDecision, PricingStrategist, Recommendation};
use crate::domain::trend::compute_trend;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::MarketDataPort;

#[derive(Parser, Debug)]
#[command(name = "tradecycle", about = "Trend-following trading cycle simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one trading cycle
    Cycle {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        dry_run: bool,
    },
    /// Compute the trend signal without trading
    Trend {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Execute a manually supplied recommendation against the account
    Exec {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        recommendation: String,
    },
    /// Validate a trading configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Cycle {
            config,
            symbol,
            dry_run,
        } => run_cycle(&config, symbol.as_deref(), dry_run),
        Command::Trend { config, symbol } => run_trend(&config, symbol.as_deref()),
        Command::Exec {
            config,
            recommendation,
        } => run_exec(&config, &recommendation),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TradecycleError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Everything a cycle needs besides the data source.
pub struct CycleSetup {
    pub symbol: String,
    pub window_size: usize,
    pub strategist: PricingStrategist,
    pub agent: TradingAgent,
    pub state: AccountState,
}

pub fn build_cycle_setup(
    adapter: &dyn ConfigPort,
    symbol_override: Option<&str>,
) -> Result<CycleSetup, TradecycleError> {
    let symbol = match symbol_override {
        Some(s) => s.to_string(),
        None => adapter.get_string("market", "symbol").ok_or_else(|| {
            TradecycleError::ConfigMissing {
                section: "market".into(),
                key: "symbol".into(),
            }
        })?,
    };

    let window_size = adapter.get_int("market", "window_size", 20);
    if window_size < 1 {
        return Err(TradecycleError::ConfigInvalid {
            section: "market".into(),
            key: "window_size".into(),
            reason: "window_size must be at least 1".into(),
        });
    }

    let risk_tolerance = adapter.get_double("strategy", "risk_tolerance", 0.05);
    let strategist = PricingStrategist::new(risk_tolerance)?;

    let api_key = adapter.get_string("account", "api_key").ok_or_else(|| {
        TradecycleError::ConfigMissing {
            section: "account".into(),
            key: "api_key".into(),
        }
    })?;
    let agent = TradingAgent::new(api_key);
    let state = AccountState::new(adapter.get_double("account", "balance", 1000.0));

    Ok(CycleSetup {
        symbol,
        window_size: window_size as usize,
        strategist,
        agent,
        state,
    })
}

pub fn build_data_source(
    adapter: &dyn ConfigPort,
) -> Result<Box<dyn MarketDataPort>, TradecycleError> {
    let source = adapter.get_string("market", "data_source").ok_or_else(|| {
        TradecycleError::ConfigMissing {
            section: "market".into(),
            key: "data_source".into(),
        }
    })?;

    match source.as_str() {
        "csv" => {
            let dir = adapter.get_string("market", "csv_dir").ok_or_else(|| {
                TradecycleError::ConfigMissing {
                    section: "market".into(),
                    key: "csv_dir".into(),
                }
            })?;
            Ok(Box::new(CsvDataAdapter::new(PathBuf::from(dir))))
        }
        "simulated" => {
            #[cfg(feature = "sim")]
            {
                let seed = adapter.get_int("market", "seed", 42).max(0) as u64;
                let observations = adapter.get_int("market", "observations", 100).max(0) as usize;
                Ok(Box::new(SimulatedDataAdapter::new(seed, observations)))
            }
            #[cfg(not(feature = "sim"))]
            {
                Err(TradecycleError::ConfigInvalid {
                    section: "market".into(),
                    key: "data_source".into(),
                    reason: "simulated data source requires the sim feature".into(),
                })
            }
        }
        other => Err(TradecycleError::ConfigInvalid {
            section: "market".into(),
            key: "data_source".into(),
            reason: format!("unknown data source '{other}' (expected csv or simulated)"),
        }),
    }
}

pub fn run_cycle(
    config_path: &PathBuf,
    symbol_override: Option<&str>,
    dry_run: bool,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_trading_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let mut setup = match build_cycle_setup(&adapter, symbol_override) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if dry_run {
        let source = adapter.get_string("market", "data_source").unwrap_or_default();
        eprintln!(
            "Dry run: would cycle {} via {} source, window {}, starting balance {:.2}",
            setup.symbol, source, setup.window_size, setup.state.balance
        );
        return ExitCode::SUCCESS;
    }

    let source = match build_data_source(&adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!(
        "Running trading cycle for {} (window {})...",
        setup.symbol, setup.window_size
    );

    let report = match cycle_engine::run_cycle(
        source.as_ref(),
        &setup.symbol,
        setup.window_size,
        &setup.strategist,
        &setup.agent,
        &mut setup.state,
        &SystemClock,
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    println!("=== Cycle Result ===");
    println!("Symbol:          {}", setup.symbol);
    println!("Direction:       {}", report.signal.direction);
    println!("Strength:        {:.2}%", report.signal.strength);
    println!("Recommendation:  {}", report.decision.recommendation);
    println!("Adjustment:      {:.2}", report.decision.adjustment_factor);
    println!("Balance:         {:.2}", report.outcome.balance);
    println!("Trades recorded: {}", setup.state.trade_count());

    ExitCode::SUCCESS
}

pub fn run_trend(config_path: &PathBuf, symbol_override: Option<&str>) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_trading_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let setup = match build_cycle_setup(&adapter, symbol_override) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let source = match build_data_source(&adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Fetching market data for {}...", setup.symbol);
    let series = match source.fetch(&setup.symbol) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!(
        "Computing trend over the last {} of {} observations...",
        setup.window_size,
        series.len()
    );
    let signal = match compute_trend(&series, setup.window_size) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    println!("=== Trend Signal ===");
    println!("Symbol:    {}", setup.symbol);
    println!("Direction: {}", signal.direction);
    println!("Strength:  {:.2}%", signal.strength);

    ExitCode::SUCCESS
}

pub fn run_exec(config_path: &PathBuf, recommendation: &str) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_trading_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let mut setup = match build_cycle_setup(&adapter, None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let recommendation: Recommendation = match recommendation.parse() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let decision = PricingDecision::standard(recommendation);

    eprintln!(
        "Executing manual {} for {}...",
        recommendation, setup.symbol
    );
    let outcome = match setup
        .agent
        .execute_trade(&mut setup.state, &decision, &SystemClock)
    {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    println!("=== Trade Result ===");
    println!("Symbol:          {}", setup.symbol);
    println!("Recommendation:  {}", outcome.recommendation);
    println!("Adjustment:      {:.2}", decision.adjustment_factor);
    println!("Balance:         {:.2}", outcome.balance);
    println!("Trades recorded: {}", setup.state.trade_count());

    ExitCode::SUCCESS
}

pub fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    match validate_trading_config(&adapter) {
        Ok(()) => {
            println!("Configuration OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
