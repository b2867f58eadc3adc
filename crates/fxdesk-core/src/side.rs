//! Side (Buy / Sell) for order drafts and confirmations.

use serde::Serialize;

/// Order side: Buy or Sell.
///
/// Serialises as `"buy"` / `"sell"`, which is what ends up in the
/// logged confirmation payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Upper-case label for buttons and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_upper_case() {
        assert_eq!(Side::Buy.label(), "BUY");
        assert_eq!(Side::Sell.label(), "SELL");
    }
}
