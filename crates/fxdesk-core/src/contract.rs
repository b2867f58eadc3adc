//! Static contract constants that every figure is computed against.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, CalcError};

/// Contract parameters for the simulated account.
///
/// Defaults reproduce the trading view: a standard 100,000-unit lot,
/// 1:100 leverage, $5,000 of account funds, a 0.0001 pip worth $10
/// per lot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractSpec {
    /// Units of base currency in one lot.
    pub contract_size: f64,
    pub leverage: f64,
    pub account_funds: f64,
    /// Smallest standard price increment.
    pub pip_size: f64,
    /// Money value of one pip for one lot.
    pub pip_value_per_lot: f64,
}

impl Default for ContractSpec {
    fn default() -> Self {
        ContractSpec {
            contract_size: 100_000.0,
            leverage: 100.0,
            account_funds: 5_000.0,
            pip_size: 0.0001,
            pip_value_per_lot: 10.0,
        }
    }
}

impl ContractSpec {
    /// Check that the divisors and scales are usable.
    ///
    /// Account funds may be any finite value (an overdrawn account is
    /// still a valid account), everything else must be positive.
    pub fn validate(&self) -> Result<(), CalcError> {
        ensure_positive("contract_size", self.contract_size)?;
        ensure_positive("leverage", self.leverage)?;
        ensure_positive("pip_size", self.pip_size)?;
        ensure_positive("pip_value_per_lot", self.pip_value_per_lot)?;
        crate::error::ensure_finite("account_funds", self.account_funds)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid() {
        assert!(ContractSpec::default().validate().is_ok());
    }

    #[test]
    fn zero_leverage_is_rejected() {
        let spec = ContractSpec {
            leverage: 0.0,
            ..ContractSpec::default()
        };
        assert_eq!(
            spec.validate(),
            Err(CalcError::NonPositive {
                field: "leverage",
                value: 0.0
            })
        );
    }
}
