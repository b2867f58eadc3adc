//! The order calculator.
//!
//! Takes the current [`Quote`] and [`OrderDraft`] and derives every
//! figure the ticket shows. Nothing derived is cached: the view calls
//! [`OrderCalculator::compute`] on each redraw, so a new quote or a
//! changed draft is always reflected.

use crate::confirmation::{OrderConfirmation, OrderKind, ProtectiveSnapshot};
use crate::contract::ContractSpec;
use crate::error::CalcError;
use crate::lot::LotSize;
use crate::margin::MarginFigures;
use crate::order::OrderDraft;
use crate::protective::{evaluate, ProtectiveKind, ProtectiveOutcome};
use crate::quote::Quote;
use crate::side::Side;

/// Everything the ticket displays for one (quote, draft) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderFigures {
    pub bid: f64,
    pub ask: f64,
    pub spread_pips: u32,
    /// Rate the order would fill at right now (ask for buys, bid for
    /// sells).
    pub market_rate: f64,
    pub margin: MarginFigures,
    pub stop_loss: ProtectiveOutcome,
    pub take_profit: ProtectiveOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderCalculator {
    spec: ContractSpec,
    max_lot: LotSize,
}

impl OrderCalculator {
    pub fn new(spec: ContractSpec, max_lot: LotSize) -> Result<Self, CalcError> {
        spec.validate()?;
        Ok(OrderCalculator { spec, max_lot })
    }

    pub fn spec(&self) -> &ContractSpec {
        &self.spec
    }

    pub fn max_lot(&self) -> LotSize {
        self.max_lot
    }

    /// Derive all figures. Pure: identical inputs give identical output.
    pub fn compute(&self, quote: &Quote, draft: &OrderDraft) -> OrderFigures {
        let spec = &self.spec;
        let market_rate = match draft.side {
            Side::Buy => quote.ask(),
            Side::Sell => quote.bid(),
        };

        OrderFigures {
            bid: quote.bid(),
            ask: quote.ask(),
            spread_pips: quote.spread_pips(spec.pip_size),
            market_rate,
            margin: MarginFigures::compute(quote, draft.lot, spec),
            stop_loss: evaluate(ProtectiveKind::StopLoss, &draft.stop_loss, quote, draft.lot, spec),
            take_profit: evaluate(
                ProtectiveKind::TakeProfit,
                &draft.take_profit,
                quote,
                draft.lot,
                spec,
            ),
        }
    }

    /// Validate the draft and snapshot it into a confirmation payload.
    ///
    /// The entry price is taken from `quote` at this instant and does
    /// not follow later ticks. Disabled protective levels are left out.
    pub fn confirm(&self, quote: &Quote, draft: &OrderDraft) -> Result<OrderConfirmation, CalcError> {
        draft.validate(self.max_lot)?;
        let figures = self.compute(quote, draft);

        let (kind, entry_price) = if draft.pending.enabled {
            (OrderKind::Pending, draft.pending.price)
        } else {
            (OrderKind::Market, figures.market_rate)
        };

        let stop_loss = draft
            .stop_loss
            .enabled
            .then(|| ProtectiveSnapshot::new(draft.stop_loss.unit, &figures.stop_loss));
        let take_profit = draft
            .take_profit
            .enabled
            .then(|| ProtectiveSnapshot::new(draft.take_profit.unit, &figures.take_profit));

        Ok(OrderConfirmation {
            kind,
            side: draft.side,
            symbol: quote.symbol().to_string(),
            lot_size: draft.lot,
            entry_price,
            stop_loss,
            take_profit,
        })
    }
}

impl Default for OrderCalculator {
    fn default() -> Self {
        OrderCalculator {
            spec: ContractSpec::default(),
            max_lot: LotSize::DEFAULT_MAX,
        }
    }
}
