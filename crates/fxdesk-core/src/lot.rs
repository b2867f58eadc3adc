//! Lot sizes.
//!
//! A lot size is held as a whole number of hundredths of a lot, so the
//! 0.01 stepper never accumulates floating point drift and the 0.01
//! floor is an integer comparison.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{ensure_finite, CalcError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LotSize(u32);

impl LotSize {
    /// 0.01 lot, the smallest tradable size.
    pub const MIN: LotSize = LotSize(1);

    /// 1.00 lot.
    pub const ONE: LotSize = LotSize(100);

    /// Default exposure limit (100 lots).
    pub const DEFAULT_MAX: LotSize = LotSize(10_000);

    /// Parse a user / programmatic lot size and check it against the
    /// floor, the 0.01 step and `max`.
    pub fn from_lots(lots: f64, max: LotSize) -> Result<Self, CalcError> {
        let lots = ensure_finite("lot_size", lots)?;
        let scaled = lots * 100.0;
        let hundredths = scaled.round();

        if (scaled - hundredths).abs() > 1e-6 {
            return Err(CalcError::LotOffStep(lots));
        }
        if hundredths < 1.0 {
            return Err(CalcError::LotBelowMinimum(lots));
        }
        if hundredths > max.0 as f64 {
            return Err(CalcError::LotAboveMaximum {
                lots,
                max: max.as_lots(),
            });
        }

        Ok(LotSize(hundredths as u32))
    }

    /// Build from a raw count of hundredths. Zero is rejected.
    pub fn from_hundredths(hundredths: u32) -> Result<Self, CalcError> {
        if hundredths == 0 {
            Err(CalcError::LotBelowMinimum(0.0))
        } else {
            Ok(LotSize(hundredths))
        }
    }

    pub fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_lots(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// One 0.01 step up, capped at `max`.
    pub fn increment(self, max: LotSize) -> LotSize {
        LotSize(self.0.saturating_add(1).min(max.0.max(Self::MIN.0)))
    }

    /// One 0.01 step down, never below [`LotSize::MIN`].
    pub fn decrement(self) -> LotSize {
        LotSize(self.0.saturating_sub(1).max(Self::MIN.0))
    }
}

impl Default for LotSize {
    fn default() -> Self {
        LotSize::ONE
    }
}

impl fmt::Display for LotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for LotSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_lots())
    }
}
