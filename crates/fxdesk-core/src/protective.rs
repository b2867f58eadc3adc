//! Stop-loss / take-profit evaluation.
//!
//! Both protective levels share one shape and differ only in which side
//! of the quote they hang off and in the sign of the money amount:
//!
//! | kind        | reference | rate (pips mode)       | amount |
//! |-------------|-----------|------------------------|--------|
//! | stop-loss   | bid       | `bid - pips * pip`     | `<= 0` |
//! | take-profit | ask       | `ask + pips * pip`     | `>= 0` |
//!
//! In price mode the entered price is the trigger rate and the pip
//! distance is measured from the reference side of the quote.

use serde::Serialize;

use crate::contract::ContractSpec;
use crate::lot::LotSize;
use crate::quote::Quote;
use crate::rounding::{round_money, round_rate};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProtectiveKind {
    StopLoss,
    TakeProfit,
}

impl ProtectiveKind {
    pub fn label(self) -> &'static str {
        match self {
            ProtectiveKind::StopLoss => "Stop loss",
            ProtectiveKind::TakeProfit => "Take profit",
        }
    }

    /// Side of the quote the level is measured from.
    pub fn reference_rate(self, quote: &Quote) -> f64 {
        match self {
            ProtectiveKind::StopLoss => quote.bid(),
            ProtectiveKind::TakeProfit => quote.ask(),
        }
    }

    fn direction(self) -> f64 {
        match self {
            ProtectiveKind::StopLoss => -1.0,
            ProtectiveKind::TakeProfit => 1.0,
        }
    }
}

/// How the user enters the level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectiveUnit {
    #[default]
    Pips,
    Price,
}

impl ProtectiveUnit {
    pub fn label(self) -> &'static str {
        match self {
            ProtectiveUnit::Pips => "Pips",
            ProtectiveUnit::Price => "Price",
        }
    }
}

/// User-controlled state of one protective level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtectiveLevel {
    pub enabled: bool,
    pub unit: ProtectiveUnit,
    /// Distance in pips, used in pips mode.
    pub pips: u32,
    /// Literal trigger price, used in price mode.
    pub price: f64,
}

impl ProtectiveLevel {
    pub fn new(pips: u32) -> Self {
        ProtectiveLevel {
            enabled: false,
            unit: ProtectiveUnit::Pips,
            pips,
            price: 0.0,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn increment_pips(&mut self) {
        self.pips = self.pips.saturating_add(1);
    }

    /// One pip closer, never below zero.
    pub fn decrement_pips(&mut self) {
        self.pips = self.pips.saturating_sub(1);
    }

    /// Free-text pip entry. Empty, negative or unparsable input counts
    /// as zero; fractions are truncated.
    pub fn set_pips_input(&mut self, input: &str) {
        let value = input.trim().parse::<f64>().unwrap_or(0.0);
        self.pips = if value.is_finite() && value > 0.0 {
            value.min(u32::MAX as f64) as u32
        } else {
            0
        };
    }

    /// Move the literal price by `steps` pips, floored at zero.
    pub fn nudge_price(&mut self, steps: i32, pip_size: f64) {
        self.price = round_rate((self.price + steps as f64 * pip_size).max(0.0));
    }

    /// Switch between pips and price entry.
    ///
    /// Entering price mode starts from the rate the pip distance
    /// currently resolves to, so the trigger does not jump.
    pub fn switch_unit(&mut self, kind: ProtectiveKind, quote: &Quote, spec: &ContractSpec) {
        match self.unit {
            ProtectiveUnit::Pips => {
                self.price = pips_rate(kind, quote, self.pips as f64, spec);
                self.unit = ProtectiveUnit::Price;
            }
            ProtectiveUnit::Price => {
                self.unit = ProtectiveUnit::Pips;
            }
        }
    }
}

/// Evaluated trigger rate and projected money outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtectiveOutcome {
    /// Pip distance from the reference rate.
    pub pips: f64,
    /// Trigger rate, 5 decimals.
    pub rate: f64,
    /// Projected profit (`>= 0`) or loss (`<= 0`), in cents.
    pub amount: f64,
}

/// Evaluate a level regardless of its enable flag.
///
/// In price mode a price on the wrong side of its reference (a stop-loss
/// above the bid, a take-profit below the ask) is not rejected: the
/// distance is taken as absolute and the sign still comes from `kind`.
pub fn evaluate(
    kind: ProtectiveKind,
    level: &ProtectiveLevel,
    quote: &Quote,
    lot: LotSize,
    spec: &ContractSpec,
) -> ProtectiveOutcome {
    let (pips, rate) = match level.unit {
        ProtectiveUnit::Pips => {
            let pips = level.pips as f64;
            (pips, pips_rate(kind, quote, pips, spec))
        }
        ProtectiveUnit::Price => {
            let rate = round_rate(level.price);
            let distance = (kind.reference_rate(quote) - rate).abs() / spec.pip_size;
            (distance, rate)
        }
    };

    ProtectiveOutcome {
        pips,
        rate,
        amount: protective_amount(kind, pips, lot.as_lots(), spec.pip_value_per_lot),
    }
}

/// `±(pip_value_per_lot * pips * lots)`, rounded to cents.
pub fn protective_amount(kind: ProtectiveKind, pips: f64, lots: f64, pip_value_per_lot: f64) -> f64 {
    kind.direction() * round_money(pip_value_per_lot * pips * lots)
}

fn pips_rate(kind: ProtectiveKind, quote: &Quote, pips: f64, spec: &ContractSpec) -> f64 {
    let offset = pips * spec.pip_size;
    round_rate(kind.reference_rate(quote) + kind.direction() * offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> Quote {
        Quote::new("AUDCAD", 0.91086, 0.00006).unwrap()
    }

    fn panel_spec() -> ContractSpec {
        ContractSpec {
            pip_value_per_lot: 7.24,
            ..ContractSpec::default()
        }
    }

    #[test]
    fn stop_loss_in_pips_hangs_below_the_bid() {
        let level = ProtectiveLevel::new(9);
        let out = evaluate(ProtectiveKind::StopLoss, &level, &quote(), LotSize::ONE, &panel_spec());
        assert_eq!(out.rate, 0.90993);
        assert_eq!(out.amount, -65.16);
        assert_eq!(out.pips, 9.0);
    }

    #[test]
    fn take_profit_in_pips_hangs_above_the_ask() {
        let level = ProtectiveLevel::new(8);
        let out = evaluate(ProtectiveKind::TakeProfit, &level, &quote(), LotSize::ONE, &panel_spec());
        assert_eq!(out.rate, 0.91169);
        assert_eq!(out.amount, 57.92);
    }

    #[test]
    fn price_mode_uses_the_literal_rate() {
        let mut level = ProtectiveLevel::new(0);
        level.unit = ProtectiveUnit::Price;
        level.price = 0.91033;
        let out = evaluate(ProtectiveKind::StopLoss, &level, &quote(), LotSize::ONE, &panel_spec());
        assert_eq!(out.rate, 0.91033);
        assert!((out.pips - 5.0).abs() < 1e-6);
        assert_eq!(out.amount, -36.2);
    }

    #[test]
    fn wrong_side_price_keeps_the_kind_sign() {
        let mut level = ProtectiveLevel::new(0);
        level.unit = ProtectiveUnit::Price;
        level.price = 0.91133;
        let out = evaluate(ProtectiveKind::StopLoss, &level, &quote(), LotSize::ONE, &panel_spec());
        assert_eq!(out.rate, 0.91133);
        assert!((out.pips - 5.0).abs() < 1e-6);
        assert_eq!(out.amount, -36.2);

        level.price = 0.91039;
        let out = evaluate(ProtectiveKind::TakeProfit, &level, &quote(), LotSize::ONE, &panel_spec());
        assert!((out.pips - 5.0).abs() < 1e-6);
        assert_eq!(out.amount, 36.2);
    }

    #[test]
    fn switching_to_price_keeps_the_trigger() {
        let spec = panel_spec();
        let mut level = ProtectiveLevel::new(9);
        let before = evaluate(ProtectiveKind::StopLoss, &level, &quote(), LotSize::ONE, &spec);
        level.switch_unit(ProtectiveKind::StopLoss, &quote(), &spec);
        let after = evaluate(ProtectiveKind::StopLoss, &level, &quote(), LotSize::ONE, &spec);
        assert_eq!(level.unit, ProtectiveUnit::Price);
        assert_eq!(before.rate, after.rate);
        assert_eq!(before.amount, after.amount);
    }

    #[test]
    fn pip_entry_clamps_at_zero() {
        let mut level = ProtectiveLevel::new(0);
        level.decrement_pips();
        assert_eq!(level.pips, 0);
        level.set_pips_input("-4");
        assert_eq!(level.pips, 0);
        level.set_pips_input("");
        assert_eq!(level.pips, 0);
        level.set_pips_input(" 12 ");
        assert_eq!(level.pips, 12);
    }

    #[test]
    fn price_nudge_never_goes_negative() {
        let mut level = ProtectiveLevel::new(0);
        level.price = 0.00005;
        level.nudge_price(-1, 0.0001);
        assert_eq!(level.price, 0.0);
    }
}
