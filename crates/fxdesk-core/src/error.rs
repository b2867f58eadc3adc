//! Error types for the calculator.
//!
//! The calculations themselves are infallible. Everything that can go
//! wrong is caught at the boundary, when raw numbers are turned into
//! [`LotSize`](crate::LotSize), [`Quote`](crate::Quote),
//! [`ContractSpec`](crate::ContractSpec) or a validated
//! [`OrderDraft`](crate::OrderDraft).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Lot size under the 0.01 floor.
    #[error("lot size {0} is below the minimum of 0.01")]
    LotBelowMinimum(f64),

    /// Lot size over the configured exposure limit.
    #[error("lot size {lots} exceeds the maximum of {max}")]
    LotAboveMaximum { lots: f64, max: f64 },

    /// Lot size that is not a whole number of 0.01 steps.
    #[error("lot size {0} is not a multiple of 0.01")]
    LotOffStep(f64),

    /// NaN or infinite input.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Price that is zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// Spread below zero.
    #[error("spread must not be negative, got {0}")]
    NegativeSpread(f64),

    /// Symbol not in the instrument catalog.
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { field })
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, CalcError> {
    let value = ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::NonPositive { field, value })
    }
}
