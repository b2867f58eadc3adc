//! Two-sided quotes derived from a mid price and a fixed spread.

use crate::error::{ensure_finite, ensure_positive, CalcError};
use crate::rounding::round_rate;

/// A live quote for one symbol.
///
/// Only the mid price and the spread are stored; bid and ask are
/// always derived from them, rounded to 5 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    symbol: String,
    mid_price: f64,
    spread: f64,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, mid_price: f64, spread: f64) -> Result<Self, CalcError> {
        let mid_price = ensure_positive("mid_price", mid_price)?;
        let spread = ensure_finite("spread", spread)?;
        if spread < 0.0 {
            return Err(CalcError::NegativeSpread(spread));
        }

        Ok(Quote {
            symbol: symbol.into(),
            mid_price,
            spread,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn mid_price(&self) -> f64 {
        self.mid_price
    }

    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// `mid - spread / 2`, rounded to 5 decimals.
    pub fn bid(&self) -> f64 {
        round_rate(self.mid_price - self.spread / 2.0)
    }

    /// `mid + spread / 2`, rounded to 5 decimals.
    pub fn ask(&self) -> f64 {
        round_rate(self.mid_price + self.spread / 2.0)
    }

    /// Spread expressed in whole pips, as shown between the Sell and
    /// Buy buttons.
    pub fn spread_pips(&self, pip_size: f64) -> u32 {
        ((self.ask() - self.bid()) / pip_size).round().max(0.0) as u32
    }

    /// Same symbol and spread, new mid price.
    ///
    /// Non-positive or non-finite prices are ignored and the quote is
    /// returned unchanged, so a feed can never publish an unusable
    /// quote.
    pub fn with_mid(&self, mid_price: f64) -> Quote {
        if mid_price.is_finite() && mid_price > 0.0 {
            Quote {
                mid_price,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bid_and_ask_straddle_the_mid() {
        let q = Quote::new("EURUSD", 1.17974, 0.0002).unwrap();
        assert_eq!(q.bid(), 1.17964);
        assert_eq!(q.ask(), 1.17984);
        assert_eq!(q.spread_pips(0.0001), 2);
    }

    #[test]
    fn rejects_unusable_inputs() {
        assert!(matches!(
            Quote::new("EURUSD", 0.0, 0.0002),
            Err(CalcError::NonPositive { field: "mid_price", .. })
        ));
        assert_eq!(
            Quote::new("EURUSD", 1.1, -0.0001),
            Err(CalcError::NegativeSpread(-0.0001))
        );
        assert!(Quote::new("EURUSD", f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn with_mid_keeps_previous_price_on_garbage() {
        let q = Quote::new("EURUSD", 1.1, 0.0002).unwrap();
        assert_eq!(q.with_mid(-1.0), q);
        assert_eq!(q.with_mid(1.2).mid_price(), 1.2);
        assert_eq!(q.with_mid(1.2).symbol(), "EURUSD");
    }
}
