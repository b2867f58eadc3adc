// crates/fxdesk-terminal/src/app.rs

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use fxdesk_core::protective::ProtectiveUnit;
use fxdesk_core::{
    CalcError, Category, Instrument, OrderCalculator, OrderConfirmation, OrderDraft, OrderFigures,
    ProtectiveKind, ProtectiveLevel, Quote, Side,
};
use indexmap::IndexMap;
use tracing::{info, warn};

/// How many confirmations the blotter keeps.
const MAX_CONFIRMATIONS: usize = 50;

pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Instruments,
    Ticket,
    StopLoss,
    TakeProfit,
    Pending,
}

#[derive(Clone)]
pub struct Confirmed {
    pub ticket: OrderConfirmation,
    pub timestamp: DateTime<Local>,
}

/// All session state of the trading view.
///
/// The selected instrument, the live quote and the draft live here and
/// nowhere else; derived figures are recomputed from them on demand.
pub struct App {
    // UI state
    pub input_mode: InputMode,
    pub current_panel: Panel,
    pub should_quit: bool,
    pub show_help: bool,

    // Instrument selection
    pub instruments: IndexMap<Category, Vec<&'static Instrument>>,
    pub highlighted_instrument: usize,
    pub instrument: &'static Instrument,
    switch_requested: bool,

    // Market state
    pub quote: Quote,
    pub tick_count: u64,
    pub last_update: Option<DateTime<Local>>,

    // Order ticket
    pub calculator: OrderCalculator,
    pub draft: Option<OrderDraft>,

    // Input buffer
    pub input_buffer: String,
    pub input_cursor: usize,

    // Feedback
    pub status: Option<String>,
    pub confirmations: VecDeque<Confirmed>,
}

impl App {
    pub fn new(instrument: &'static Instrument, calculator: OrderCalculator) -> Result<Self, CalcError> {
        let mut instruments: IndexMap<Category, Vec<&'static Instrument>> = IndexMap::new();
        for category in Category::ALL {
            instruments.insert(category, Instrument::in_category(category).collect());
        }

        let highlighted_instrument = Instrument::catalog()
            .iter()
            .position(|i| i.symbol == instrument.symbol)
            .unwrap_or(0);

        Ok(Self {
            input_mode: InputMode::Normal,
            current_panel: Panel::Instruments,
            should_quit: false,
            show_help: false,
            instruments,
            highlighted_instrument,
            instrument,
            switch_requested: false,
            quote: instrument.initial_quote()?,
            tick_count: 0,
            last_update: None,
            calculator,
            draft: None,
            input_buffer: String::new(),
            input_cursor: 0,
            status: None,
            confirmations: VecDeque::with_capacity(MAX_CONFIRMATIONS),
        })
    }

    /// Figures for the open ticket at the current quote.
    pub fn figures(&self) -> Option<OrderFigures> {
        self.draft
            .as_ref()
            .map(|draft| self.calculator.compute(&self.quote, draft))
    }

    pub fn ticket_open(&self) -> bool {
        self.draft.is_some()
    }

    // -------------------------------------------------------------------------
    // Quotes
    // -------------------------------------------------------------------------

    /// Apply a quote from the feed. Quotes for any other symbol are
    /// leftovers from a feed that was just replaced and are dropped.
    pub fn apply_quote(&mut self, quote: Quote) {
        if quote.symbol() != self.instrument.symbol {
            return;
        }
        self.quote = quote;
        self.tick_count += 1;
        self.last_update = Some(Local::now());
    }

    /// Returns the instrument the feed must be restarted for, once.
    pub fn take_instrument_switch(&mut self) -> Option<(&'static Instrument, Quote)> {
        if self.switch_requested {
            self.switch_requested = false;
            Some((self.instrument, self.quote.clone()))
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn next_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Instruments => Panel::Ticket,
            Panel::Ticket => Panel::StopLoss,
            Panel::StopLoss => Panel::TakeProfit,
            Panel::TakeProfit => Panel::Pending,
            Panel::Pending => Panel::Instruments,
        };
    }

    pub fn prev_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Instruments => Panel::Pending,
            Panel::Ticket => Panel::Instruments,
            Panel::StopLoss => Panel::Ticket,
            Panel::TakeProfit => Panel::StopLoss,
            Panel::Pending => Panel::TakeProfit,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn move_selection_up(&mut self) {
        if self.current_panel == Panel::Instruments && self.highlighted_instrument > 0 {
            self.highlighted_instrument -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.current_panel == Panel::Instruments
            && self.highlighted_instrument < Instrument::catalog().len().saturating_sub(1)
        {
            self.highlighted_instrument += 1;
        }
    }

    /// Make the highlighted catalog entry the traded instrument.
    ///
    /// Switching discards the open ticket (its figures belong to the
    /// old quote) and restarts the quote from the catalog snapshot.
    pub fn select_highlighted_instrument(&mut self) {
        let Some(next) = Instrument::catalog().get(self.highlighted_instrument) else {
            return;
        };
        if next.symbol == self.instrument.symbol {
            return;
        }

        match next.initial_quote() {
            Ok(quote) => {
                info!("Switching instrument {} -> {}", self.instrument.symbol, next.symbol);
                self.instrument = next;
                self.quote = quote;
                self.tick_count = 0;
                self.last_update = None;
                self.draft = None;
                self.switch_requested = true;
                self.status = Some(format!("Trading {}", next.symbol));
            }
            Err(e) => {
                warn!("Cannot trade {}: {}", next.symbol, e);
                self.status = Some(format!("Cannot trade {}: {}", next.symbol, e));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Ticket
    // -------------------------------------------------------------------------

    /// Open the ticket for `side`, or flip the side of an open one.
    pub fn start_order_entry(&mut self, side: Side) {
        if let Some(draft) = self.draft.as_mut() {
            draft.side = side;
        } else {
            let mut draft = OrderDraft::new(side);
            draft.pending.price = match side {
                Side::Buy => self.quote.ask(),
                Side::Sell => self.quote.bid(),
            };
            self.draft = Some(draft);
        }
        self.current_panel = Panel::Ticket;
        self.status = None;
    }

    pub fn close_ticket(&mut self) {
        self.draft = None;
        self.input_mode = InputMode::Normal;
        self.current_panel = Panel::Instruments;
    }

    /// `+` on the focused panel.
    pub fn increase(&mut self) {
        self.step(1);
    }

    /// `-` on the focused panel.
    pub fn decrease(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, direction: i32) {
        let max_lot = self.calculator.max_lot();
        let pip_size = self.calculator.spec().pip_size;
        let panel = self.current_panel;
        let Some(draft) = self.draft.as_mut() else {
            return;
        };

        match panel {
            Panel::Ticket => {
                if direction > 0 {
                    draft.increment_lot(max_lot);
                } else {
                    draft.decrement_lot();
                }
            }
            Panel::StopLoss => step_level(&mut draft.stop_loss, direction, pip_size),
            Panel::TakeProfit => step_level(&mut draft.take_profit, direction, pip_size),
            Panel::Pending => draft.pending.nudge(direction, pip_size),
            Panel::Instruments => {}
        }
    }

    pub fn toggle_stop_loss(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.stop_loss.toggle();
        }
    }

    pub fn toggle_take_profit(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.take_profit.toggle();
        }
    }

    pub fn toggle_pending(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.pending.toggle();
        }
    }

    /// Flip pips/price entry on the focused protective panel.
    pub fn switch_unit(&mut self) {
        let spec = *self.calculator.spec();
        let Some(draft) = self.draft.as_mut() else {
            return;
        };

        match self.current_panel {
            Panel::StopLoss => draft
                .stop_loss
                .switch_unit(ProtectiveKind::StopLoss, &self.quote, &spec),
            Panel::TakeProfit => draft
                .take_profit
                .switch_unit(ProtectiveKind::TakeProfit, &self.quote, &spec),
            _ => {}
        }
    }

    /// Validate and snapshot the ticket, log the payload, close the
    /// ticket.
    pub fn confirm_order(&mut self) {
        let Some(draft) = self.draft.as_ref() else {
            return;
        };

        match self.calculator.confirm(&self.quote, draft) {
            Ok(ticket) => {
                match serde_json::to_string(&ticket) {
                    Ok(payload) => info!(target: "fxdesk::order", "Trade executed: {}", payload),
                    Err(e) => warn!("Could not serialise confirmation: {}", e),
                }

                self.status = Some(format!("Confirmed {}", ticket));
                self.confirmations.push_front(Confirmed {
                    ticket,
                    timestamp: Local::now(),
                });
                if self.confirmations.len() > MAX_CONFIRMATIONS {
                    self.confirmations.pop_back();
                }
                self.close_ticket();
            }
            Err(e) => {
                warn!("Rejected order draft: {}", e);
                self.status = Some(format!("Rejected: {}", e));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Free-text entry
    // -------------------------------------------------------------------------

    /// Start typing a value for the focused panel, prefilled with the
    /// current one.
    pub fn start_editing(&mut self) {
        let Some(draft) = self.draft.as_ref() else {
            return;
        };

        let current = match self.current_panel {
            Panel::Ticket => draft.lot.to_string(),
            Panel::StopLoss => level_input(&draft.stop_loss),
            Panel::TakeProfit => level_input(&draft.take_profit),
            Panel::Pending => format!("{:.5}", draft.pending.price),
            Panel::Instruments => return,
        };

        self.input_cursor = current.len();
        self.input_buffer = current;
        self.input_mode = InputMode::Editing;
    }

    pub fn submit_input(&mut self) {
        if !matches!(self.input_mode, InputMode::Editing) {
            return;
        }

        let input = self.input_buffer.trim().to_string();
        let max_lot = self.calculator.max_lot();
        let panel = self.current_panel;

        if let Some(draft) = self.draft.as_mut() {
            let result = match panel {
                Panel::Ticket => parse_number(&input)
                    .and_then(|lots| draft.set_lots(lots, max_lot)),
                Panel::StopLoss => apply_level_input(&mut draft.stop_loss, &input),
                Panel::TakeProfit => apply_level_input(&mut draft.take_profit, &input),
                Panel::Pending => parse_price(&input).map(|price| draft.pending.price = price),
                Panel::Instruments => Ok(()),
            };

            if let Err(e) = result {
                self.status = Some(format!("Invalid input: {}", e));
            }
        }

        self.cancel_input();
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.input_mode = InputMode::Normal;
    }

    /// Every editable field is numeric, so anything other than digits,
    /// `.` and `-` is dropped. `input_cursor` is a byte offset.
    pub fn enter_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.' || c == '-') {
            return;
        }
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if let Some(c) = self.input_buffer[..self.input_cursor].chars().next_back() {
            self.input_cursor -= c.len_utf8();
            self.input_buffer.remove(self.input_cursor);
        }
    }
}

fn step_level(level: &mut ProtectiveLevel, direction: i32, pip_size: f64) {
    match level.unit {
        ProtectiveUnit::Pips if direction > 0 => level.increment_pips(),
        ProtectiveUnit::Pips => level.decrement_pips(),
        ProtectiveUnit::Price => level.nudge_price(direction, pip_size),
    }
}

fn level_input(level: &ProtectiveLevel) -> String {
    match level.unit {
        ProtectiveUnit::Pips => level.pips.to_string(),
        ProtectiveUnit::Price => format!("{:.5}", level.price),
    }
}

fn apply_level_input(level: &mut ProtectiveLevel, input: &str) -> Result<(), CalcError> {
    match level.unit {
        ProtectiveUnit::Pips => {
            level.set_pips_input(input);
            Ok(())
        }
        ProtectiveUnit::Price => {
            level.price = parse_price(input)?;
            Ok(())
        }
    }
}

fn parse_number(input: &str) -> Result<f64, CalcError> {
    input
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(CalcError::NonFinite { field: "input" })
}

fn parse_price(input: &str) -> Result<f64, CalcError> {
    let value = parse_number(input)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::NonPositive {
            field: "price",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxdesk_core::LotSize;

    fn app() -> App {
        let instrument = Instrument::lookup("EURUSD").unwrap();
        App::new(instrument, OrderCalculator::default()).unwrap()
    }

    fn type_and_submit(app: &mut App, text: &str) {
        app.start_editing();
        app.input_buffer.clear();
        app.input_cursor = 0;
        for c in text.chars() {
            app.enter_char(c);
        }
        app.submit_input();
    }

    #[test]
    fn figures_only_exist_with_an_open_ticket() {
        let mut app = app();
        assert!(app.figures().is_none());
        app.start_order_entry(Side::Buy);
        let figures = app.figures().unwrap();
        assert_eq!(figures.market_rate, app.quote.ask());
    }

    #[test]
    fn new_quotes_change_the_figures() {
        let mut app = app();
        app.start_order_entry(Side::Buy);
        let before = app.figures().unwrap();

        let moved = app.quote.with_mid(app.quote.mid_price() + 0.001);
        app.apply_quote(moved);

        assert_eq!(app.tick_count, 1);
        assert_ne!(app.figures().unwrap().market_rate, before.market_rate);
    }

    #[test]
    fn quotes_for_another_symbol_are_ignored() {
        let mut app = app();
        let stale = Quote::new("GBPUSD", 1.3, 0.0002).unwrap();
        app.apply_quote(stale);
        assert_eq!(app.quote.symbol(), "EURUSD");
        assert_eq!(app.tick_count, 0);
    }

    #[test]
    fn minus_on_ticket_stops_at_minimum_lot() {
        let mut app = app();
        app.start_order_entry(Side::Sell);
        for _ in 0..150 {
            app.decrease();
        }
        assert_eq!(app.draft.as_ref().unwrap().lot, LotSize::MIN);
        app.increase();
        assert_eq!(app.draft.as_ref().unwrap().lot.to_string(), "0.02");
    }

    #[test]
    fn stop_loss_panel_steps_pips() {
        let mut app = app();
        app.start_order_entry(Side::Buy);
        app.next_panel();
        assert_eq!(app.current_panel, Panel::StopLoss);
        app.increase();
        assert_eq!(app.draft.as_ref().unwrap().stop_loss.pips, 10);
        for _ in 0..20 {
            app.decrease();
        }
        assert_eq!(app.draft.as_ref().unwrap().stop_loss.pips, 0);
    }

    #[test]
    fn confirm_records_and_closes_the_ticket() {
        let mut app = app();
        app.start_order_entry(Side::Buy);
        app.toggle_take_profit();
        let ask = app.quote.ask();

        app.confirm_order();

        assert!(!app.ticket_open());
        let confirmed = &app.confirmations[0].ticket;
        assert_eq!(confirmed.side, Side::Buy);
        assert_eq!(confirmed.entry_price, ask);
        assert!(confirmed.stop_loss.is_none());
        assert!(confirmed.take_profit.is_some());
        assert!(app.status.as_deref().unwrap().starts_with("Confirmed BUY"));
    }

    #[test]
    fn typed_lot_size_is_validated() {
        let mut app = app();
        app.start_order_entry(Side::Buy);

        type_and_submit(&mut app, "2.5");
        assert_eq!(app.draft.as_ref().unwrap().lot.hundredths(), 250);

        type_and_submit(&mut app, "0.001");
        assert_eq!(app.draft.as_ref().unwrap().lot.hundredths(), 250);
        assert!(app.status.as_deref().unwrap().starts_with("Invalid input"));

        type_and_submit(&mut app, "abc");
        assert_eq!(app.draft.as_ref().unwrap().lot.hundredths(), 250);
    }

    #[test]
    fn non_numeric_keys_are_ignored_while_editing() {
        let mut app = app();
        app.start_order_entry(Side::Buy);
        app.start_editing();
        app.input_buffer.clear();
        app.input_cursor = 0;

        for c in ['é', '1', '€', '.', 'x', '5'] {
            app.enter_char(c);
        }
        assert_eq!(app.input_buffer, "1.5");
        assert_eq!(app.input_cursor, 3);

        app.delete_char();
        app.enter_char('£');
        app.enter_char('2');
        assert_eq!(app.input_buffer, "1.2");

        app.submit_input();
        assert_eq!(app.draft.as_ref().unwrap().lot.hundredths(), 120);
    }

    #[test]
    fn delete_on_empty_input_is_a_no_op() {
        let mut app = app();
        app.start_order_entry(Side::Buy);
        app.start_editing();
        app.cancel_input();
        app.delete_char();
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn price_mode_entry_sets_the_literal_rate() {
        let mut app = app();
        app.start_order_entry(Side::Buy);
        app.current_panel = Panel::TakeProfit;
        app.toggle_take_profit();
        app.switch_unit();
        type_and_submit(&mut app, "1.1805");

        let figures = app.figures().unwrap();
        assert_eq!(figures.take_profit.rate, 1.1805);
    }

    #[test]
    fn selecting_another_instrument_requests_a_feed_restart() {
        let mut app = app();
        app.start_order_entry(Side::Buy);
        app.current_panel = Panel::Instruments;
        app.move_selection_down();
        app.select_highlighted_instrument();

        assert_eq!(app.instrument.symbol, "GBPUSD");
        assert!(!app.ticket_open());
        let (instrument, quote) = app.take_instrument_switch().unwrap();
        assert_eq!(instrument.symbol, "GBPUSD");
        assert_eq!(quote.symbol(), "GBPUSD");
        assert!(app.take_instrument_switch().is_none());
    }

    #[test]
    fn reselecting_the_same_instrument_is_a_no_op() {
        let mut app = app();
        app.select_highlighted_instrument();
        assert!(app.take_instrument_switch().is_none());
    }
}
