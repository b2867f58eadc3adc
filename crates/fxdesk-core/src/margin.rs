//! Margin and fund figures for a lot size at the current quote.

use crate::contract::ContractSpec;
use crate::lot::LotSize;
use crate::quote::Quote;

/// Figures shown in the order ticket.
///
/// Values are unrounded; round with [`crate::rounding`] only when
/// displaying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginFigures {
    /// Position size in units of base currency.
    pub lot_value: f64,
    /// Money value of a one-pip move for this lot size.
    pub pip_value: f64,
    /// Capital reserved to open the position.
    pub required_margin: f64,
    /// Account funds left after reserving the margin.
    pub available_funds: f64,
}

impl MarginFigures {
    pub fn compute(quote: &Quote, lot: LotSize, spec: &ContractSpec) -> Self {
        let lots = lot.as_lots();
        let required_margin = required_margin(lots, quote.mid_price(), spec);

        MarginFigures {
            lot_value: lots * spec.contract_size,
            pip_value: lots * spec.pip_value_per_lot,
            required_margin,
            available_funds: spec.account_funds - required_margin,
        }
    }

    /// `true` when the margin cannot be covered by the account funds.
    pub fn is_overextended(&self) -> bool {
        self.available_funds < 0.0
    }
}

/// `lots * contract_size * price / leverage`.
pub fn required_margin(lots: f64, price: f64, spec: &ContractSpec) -> f64 {
    (lots * spec.contract_size * price) / spec.leverage
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eurusd() -> Quote {
        Quote::new("EURUSD", 1.17974, 0.0002).unwrap()
    }

    #[test]
    fn one_lot_figures() {
        let figures = MarginFigures::compute(&eurusd(), LotSize::ONE, &ContractSpec::default());
        assert_eq!(figures.lot_value, 100_000.0);
        assert_eq!(figures.pip_value, 10.0);
        assert!((figures.required_margin - 1179.74).abs() < 1e-9);
        assert!((figures.available_funds - 3820.26).abs() < 1e-9);
        assert!(!figures.is_overextended());
    }

    #[test]
    fn large_position_overextends_the_account() {
        let five_lots = LotSize::from_hundredths(500).unwrap();
        let figures = MarginFigures::compute(&eurusd(), five_lots, &ContractSpec::default());
        assert!(figures.is_overextended());
    }
}
