//! Order confirmation payloads.
//!
//! A confirmation is a frozen snapshot of the ticket at the moment the
//! user confirms. It is serialised with camelCase keys:
//!
//! ```json
//! {"kind":"market","type":"buy","symbol":"EURUSD","lotSize":1.0,
//!  "entryPrice":1.17984,"stopLoss":{"unit":"pips","pips":9.0,"rate":1.17874,"amount":-90.0},
//!  "takeProfit":null}
//! ```

use std::fmt;

use serde::Serialize;

use crate::lot::LotSize;
use crate::protective::{ProtectiveOutcome, ProtectiveUnit};
use crate::rounding::format_rate;
use crate::side::Side;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Fill at the current bid/ask.
    Market,
    /// Open when the price reaches the pending entry.
    Pending,
}

/// An enabled stop-loss or take-profit as it stood at confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProtectiveSnapshot {
    pub unit: ProtectiveUnit,
    pub pips: f64,
    pub rate: f64,
    pub amount: f64,
}

impl ProtectiveSnapshot {
    pub fn new(unit: ProtectiveUnit, outcome: &ProtectiveOutcome) -> Self {
        ProtectiveSnapshot {
            unit,
            pips: outcome.pips,
            rate: outcome.rate,
            amount: outcome.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub kind: OrderKind,
    #[serde(rename = "type")]
    pub side: Side,
    pub symbol: String,
    pub lot_size: LotSize,
    pub entry_price: f64,
    pub stop_loss: Option<ProtectiveSnapshot>,
    pub take_profit: Option<ProtectiveSnapshot>,
}

impl fmt::Display for OrderConfirmation {
    /// One-line summary, e.g. `BUY 1.00 EURUSD @ 1.17984`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.side.label(),
            self.lot_size,
            self.symbol,
            format_rate(self.entry_price)
        )?;
        if self.kind == OrderKind::Pending {
            write!(f, " (pending)")?;
        }
        if let Some(sl) = &self.stop_loss {
            write!(f, " SL {}", format_rate(sl.rate))?;
        }
        if let Some(tp) = &self.take_profit {
            write!(f, " TP {}", format_rate(tp.rate))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket() -> OrderConfirmation {
        OrderConfirmation {
            kind: OrderKind::Market,
            side: Side::Buy,
            symbol: "EURUSD".to_string(),
            lot_size: LotSize::ONE,
            entry_price: 1.17984,
            stop_loss: Some(ProtectiveSnapshot {
                unit: ProtectiveUnit::Pips,
                pips: 9.0,
                rate: 1.17874,
                amount: -90.0,
            }),
            take_profit: None,
        }
    }

    #[test]
    fn serialises_with_payload_field_names() {
        let json = serde_json::to_value(ticket()).unwrap();
        assert_eq!(json["type"], "buy");
        assert_eq!(json["kind"], "market");
        assert_eq!(json["lotSize"], 1.0);
        assert_eq!(json["entryPrice"], 1.17984);
        assert_eq!(json["stopLoss"]["unit"], "pips");
        assert_eq!(json["stopLoss"]["amount"], -90.0);
        assert!(json["takeProfit"].is_null());
    }

    #[test]
    fn display_is_a_one_line_summary() {
        assert_eq!(ticket().to_string(), "BUY 1.00 EURUSD @ 1.17984 SL 1.17874");
    }
}
