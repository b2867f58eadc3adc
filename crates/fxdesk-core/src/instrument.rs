//! Static instrument catalog.
//!
//! The catalog is a fixed snapshot grouped by asset class. It is only
//! used to pick an instrument and to seed the quote simulator; live
//! prices come from the simulator afterwards.

use crate::error::CalcError;
use crate::quote::Quote;
use crate::rounding::round_rate;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Forex,
    Crypto,
    Commodities,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Forex, Category::Crypto, Category::Commodities];

    pub fn label(self) -> &'static str {
        match self {
            Category::Forex => "Forex",
            Category::Crypto => "Crypto",
            Category::Commodities => "Commodities",
        }
    }
}

/// One catalog entry with its snapshot prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub symbol: &'static str,
    pub category: Category,
    /// Daily change in percent.
    pub change: f64,
    pub bid: f64,
    pub ask: f64,
    pub low: f64,
    pub high: f64,
}

const CATALOG: &[Instrument] = &[
    Instrument {
        symbol: "EURUSD",
        category: Category::Forex,
        change: 0.02,
        bid: 1.18031,
        ask: 1.18051,
        low: 1.17626,
        high: 1.18199,
    },
    Instrument {
        symbol: "GBPUSD",
        category: Category::Forex,
        change: -0.04,
        bid: 1.35043,
        ask: 1.35082,
        low: 1.34869,
        high: 1.35278,
    },
    Instrument {
        symbol: "BTCUSD",
        category: Category::Crypto,
        change: 2.4,
        bid: 27350.0,
        ask: 27370.0,
        low: 27000.0,
        high: 27500.0,
    },
    Instrument {
        symbol: "ETHUSD",
        category: Category::Crypto,
        change: -1.2,
        bid: 1650.0,
        ask: 1655.0,
        low: 1600.0,
        high: 1680.0,
    },
    Instrument {
        symbol: "XAUUSD",
        category: Category::Commodities,
        change: 0.5,
        bid: 1920.0,
        ask: 1922.0,
        low: 1900.0,
        high: 1935.0,
    },
    Instrument {
        symbol: "XAGUSD",
        category: Category::Commodities,
        change: -0.3,
        bid: 24.1,
        ask: 24.3,
        low: 23.9,
        high: 24.5,
    },
];

impl Instrument {
    /// Every instrument, in display order (grouped by category).
    pub fn catalog() -> &'static [Instrument] {
        CATALOG
    }

    /// Instruments of one category, in display order.
    pub fn in_category(category: Category) -> impl Iterator<Item = &'static Instrument> {
        CATALOG.iter().filter(move |i| i.category == category)
    }

    /// Case-insensitive lookup. `EUR/USD` and `eurusd` both match.
    pub fn lookup(symbol: &str) -> Result<&'static Instrument, CalcError> {
        let wanted: String = symbol
            .chars()
            .filter(|c| *c != '/')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        CATALOG
            .iter()
            .find(|i| i.symbol == wanted)
            .ok_or_else(|| CalcError::UnknownInstrument(symbol.to_string()))
    }

    /// Base currency: the part before `/`, or the first three letters.
    pub fn base_currency(&self) -> &'static str {
        base_currency(self.symbol)
    }

    /// Quote the simulator starts from: mid between the snapshot bid
    /// and ask, spread equal to their distance.
    pub fn initial_quote(&self) -> Result<Quote, CalcError> {
        let mid = round_rate((self.bid + self.ask) / 2.0);
        let spread = round_rate(self.ask - self.bid);
        Quote::new(self.symbol, mid, spread)
    }
}

fn base_currency(symbol: &str) -> &str {
    if let Some((base, _)) = symbol.split_once('/') {
        return base;
    }
    symbol.get(..3).unwrap_or(symbol)
}
