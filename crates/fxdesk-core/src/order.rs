//! Order drafts: what the user has dialled into the ticket so far.

use crate::error::{ensure_positive, CalcError};
use crate::lot::LotSize;
use crate::protective::{ProtectiveLevel, ProtectiveUnit};
use crate::rounding::round_rate;
use crate::side::Side;

/// Default stop-loss distance offered by the ticket.
pub const DEFAULT_STOP_PIPS: u32 = 9;

/// Default take-profit distance offered by the ticket.
pub const DEFAULT_TAKE_PROFIT_PIPS: u32 = 8;

/// "Open order when price is": a pending entry price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingEntry {
    pub enabled: bool,
    pub price: f64,
}

impl PendingEntry {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Move by `steps` pips, floored at zero, 5 decimals.
    pub fn nudge(&mut self, steps: i32, pip_size: f64) {
        self.price = round_rate((self.price + steps as f64 * pip_size).max(0.0));
    }
}

/// Mutable ticket state. Derived figures are never stored here; see
/// [`OrderCalculator`](crate::OrderCalculator).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub side: Side,
    pub lot: LotSize,
    pub stop_loss: ProtectiveLevel,
    pub take_profit: ProtectiveLevel,
    pub pending: PendingEntry,
}

impl OrderDraft {
    /// A fresh 1.00-lot ticket with protective levels switched off.
    pub fn new(side: Side) -> Self {
        OrderDraft {
            side,
            lot: LotSize::default(),
            stop_loss: ProtectiveLevel::new(DEFAULT_STOP_PIPS),
            take_profit: ProtectiveLevel::new(DEFAULT_TAKE_PROFIT_PIPS),
            pending: PendingEntry {
                enabled: false,
                price: 0.0,
            },
        }
    }

    pub fn increment_lot(&mut self, max: LotSize) {
        self.lot = self.lot.increment(max);
    }

    pub fn decrement_lot(&mut self) {
        self.lot = self.lot.decrement();
    }

    /// Set the lot size from raw input, rejecting anything outside
    /// `[0.01, max]` or off the 0.01 step. The draft is left untouched
    /// on error.
    pub fn set_lots(&mut self, lots: f64, max: LotSize) -> Result<(), CalcError> {
        self.lot = LotSize::from_lots(lots, max)?;
        Ok(())
    }

    /// Boundary check before a draft is priced or confirmed.
    pub fn validate(&self, max: LotSize) -> Result<(), CalcError> {
        if self.lot > max {
            return Err(CalcError::LotAboveMaximum {
                lots: self.lot.as_lots(),
                max: max.as_lots(),
            });
        }

        for (field, level) in [
            ("stop_loss.price", &self.stop_loss),
            ("take_profit.price", &self.take_profit),
        ] {
            if level.enabled && level.unit == ProtectiveUnit::Price {
                ensure_positive(field, level.price)?;
            }
        }

        if self.pending.enabled {
            ensure_positive("pending.price", self.pending.price)?;
        }

        Ok(())
    }
}
