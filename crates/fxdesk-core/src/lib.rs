//! fxdesk-core
//!
//! Pure quote and order calculator logic:
//! - quotes and the random-walk quote simulator
//! - lot sizes and the contract specification
//! - margin / pip value figures
//! - stop-loss / take-profit evaluation
//! - order drafts and confirmation payloads
//! - the static instrument catalog

pub mod side;
pub mod error;
pub mod rounding;
pub mod contract;
pub mod lot;
pub mod quote;
pub mod instrument;
pub mod margin;
pub mod protective;
pub mod order;
pub mod calculator;
pub mod confirmation;
pub mod simulator;

pub use side::Side;
pub use error::CalcError;
pub use contract::ContractSpec;
pub use lot::LotSize;
pub use quote::Quote;
pub use instrument::{Category, Instrument};
pub use margin::MarginFigures;
pub use protective::{ProtectiveKind, ProtectiveLevel, ProtectiveOutcome, ProtectiveUnit};
pub use order::{OrderDraft, PendingEntry};
pub use calculator::{OrderCalculator, OrderFigures};
pub use confirmation::{OrderConfirmation, OrderKind, ProtectiveSnapshot};
pub use simulator::QuoteSimulator;
