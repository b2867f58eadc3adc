// crates/fxdesk-terminal/src/config.rs

//! Terminal configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags. Every field has a default, so an empty file (or
//! no file at all) gives the stock trading view:
//!
//! ```toml
//! symbol = "EURUSD"
//! tick_interval_ms = 1500
//! max_step = 0.00015
//! max_lot = 100.0
//! # seed = 42
//!
//! [contract]
//! contract_size = 100000.0
//! leverage = 100.0
//! account_funds = 5000.0
//! pip_size = 0.0001
//! pip_value_per_lot = 10.0
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use fxdesk_core::simulator::DEFAULT_MAX_STEP;
use fxdesk_core::{ContractSpec, Instrument, LotSize, OrderCalculator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Instrument the trading view opens on.
    pub symbol: String,
    /// Quote feed period.
    pub tick_interval_ms: u64,
    /// Largest simulated price move per tick.
    pub max_step: f64,
    /// Exposure limit in lots.
    pub max_lot: f64,
    /// Fixed simulator seed; random when absent.
    pub seed: Option<u64>,
    pub contract: ContractSpec,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            symbol: "EURUSD".to_string(),
            tick_interval_ms: 1500,
            max_step: DEFAULT_MAX_STEP,
            max_lot: 100.0,
            seed: None,
            contract: ContractSpec::default(),
        }
    }
}

impl TerminalConfig {
    /// Read `path` if given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Self::from_toml(&raw).with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn tick_interval(&self) -> Result<Duration> {
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be greater than zero");
        }
        Ok(Duration::from_millis(self.tick_interval_ms))
    }

    pub fn max_lot(&self) -> Result<LotSize> {
        let ceiling = LotSize::from_hundredths(u32::MAX)?;
        LotSize::from_lots(self.max_lot, ceiling).context("invalid max_lot")
    }

    pub fn instrument(&self) -> Result<&'static Instrument> {
        Ok(Instrument::lookup(&self.symbol)?)
    }

    pub fn calculator(&self) -> Result<OrderCalculator> {
        OrderCalculator::new(self.contract, self.max_lot()?).context("invalid contract settings")
    }

    /// Check everything up front so the terminal never starts with a
    /// config it cannot honour.
    pub fn validate(&self) -> Result<()> {
        self.tick_interval()?;
        self.instrument()?;
        self.calculator()?;
        if !(self.max_step.is_finite() && self.max_step > 0.0) {
            bail!("max_step must be greater than zero, got {}", self.max_step);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = TerminalConfig::from_toml("").unwrap();
        assert_eq!(config, TerminalConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval().unwrap(), Duration::from_millis(1500));
        assert_eq!(config.max_lot().unwrap(), LotSize::DEFAULT_MAX);
    }

    #[test]
    fn partial_contract_section_keeps_other_defaults() {
        let config = TerminalConfig::from_toml(
            r#"
            symbol = "gbpusd"
            seed = 42

            [contract]
            leverage = 30.0
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.contract.leverage, 30.0);
        assert_eq!(config.contract.contract_size, 100_000.0);
        assert_eq!(config.instrument().unwrap().symbol, "GBPUSD");
    }

    #[test]
    fn rejects_unusable_settings() {
        let zero_tick = TerminalConfig {
            tick_interval_ms: 0,
            ..TerminalConfig::default()
        };
        assert!(zero_tick.validate().is_err());

        let unknown = TerminalConfig {
            symbol: "NOPE".to_string(),
            ..TerminalConfig::default()
        };
        assert!(unknown.validate().is_err());

        let tiny_max = TerminalConfig {
            max_lot: 0.001,
            ..TerminalConfig::default()
        };
        assert!(tiny_max.validate().is_err());
    }

    #[test]
    fn load_without_path_is_default() {
        assert_eq!(TerminalConfig::load(None).unwrap(), TerminalConfig::default());
    }
}
