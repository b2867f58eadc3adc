// crates/fxdesk-core/tests/calculator_scenarios.rs
use fxdesk_core::margin::required_margin;
use fxdesk_core::protective::{evaluate, protective_amount};
use fxdesk_core::{
    ContractSpec, LotSize, OrderCalculator, OrderDraft, ProtectiveKind, ProtectiveLevel, Quote,
    QuoteSimulator, Side,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.005 + 1e-9
}

#[test]
fn quote_scenario_bid_and_ask() {
    let quote = Quote::new("EURUSD", 1.17974, 0.0002).unwrap();
    assert_eq!(quote.bid(), 1.17964);
    assert_eq!(quote.ask(), 1.17984);
}

#[test]
fn one_lot_margin_scenario() {
    let quote = Quote::new("EURUSD", 1.17974, 0.0002).unwrap();
    let figures = OrderCalculator::default().compute(&quote, &OrderDraft::new(Side::Buy));
    assert!((figures.margin.required_margin - 1179.74).abs() < 1e-9);
    assert_eq!(format!("{:.2}", figures.margin.required_margin), "1179.74");
}

#[test]
fn stop_loss_amount_scenario() {
    assert_eq!(protective_amount(ProtectiveKind::StopLoss, 9.0, 1.0, 7.24), -65.16);
}

#[test]
fn required_margin_is_the_plain_formula_for_every_lot_and_price() {
    let spec = ContractSpec::default();
    let prices = [0.00001, 0.91086, 1.17974, 24.2, 1921.0, 27360.0];

    for hundredths in [1u32, 7, 50, 100, 133, 999, 10_000] {
        let lot = LotSize::from_hundredths(hundredths).unwrap();
        for price in prices {
            let quote = Quote::new("X", price, 0.0).unwrap();
            let mut draft = OrderDraft::new(Side::Buy);
            draft.lot = lot;
            let figures = OrderCalculator::default().compute(&quote, &draft);
            let expected = lot.as_lots() * 100_000.0 * price / 100.0;
            assert_eq!(figures.margin.required_margin, expected);
            assert_eq!(required_margin(lot.as_lots(), price, &spec), expected);
        }
    }
}

#[test]
fn stop_loss_is_never_positive_and_take_profit_never_negative() {
    let spec = ContractSpec {
        pip_value_per_lot: 7.24,
        ..ContractSpec::default()
    };
    let quote = Quote::new("AUDCAD", 0.91086, 0.00006).unwrap();

    for hundredths in [1u32, 10, 100, 250] {
        let lot = LotSize::from_hundredths(hundredths).unwrap();
        for pips in [0u32, 1, 9, 37, 500] {
            let level = ProtectiveLevel::new(pips);
            let raw = spec.pip_value_per_lot * pips as f64 * lot.as_lots();

            let sl = evaluate(ProtectiveKind::StopLoss, &level, &quote, lot, &spec);
            assert!(sl.amount <= 0.0);
            assert!(close(sl.amount.abs(), raw));

            let tp = evaluate(ProtectiveKind::TakeProfit, &level, &quote, lot, &spec);
            assert!(tp.amount >= 0.0);
            assert!(close(tp.amount, raw));
        }
    }
}

#[test]
fn computing_twice_gives_identical_figures() {
    let calc = OrderCalculator::default();
    let quote = Quote::new("EURUSD", 1.17974, 0.0002).unwrap();
    let mut draft = OrderDraft::new(Side::Sell);
    draft.stop_loss.enabled = true;
    draft.take_profit.enabled = true;

    assert_eq!(calc.compute(&quote, &draft), calc.compute(&quote, &draft));
    assert_eq!(calc.confirm(&quote, &draft), calc.confirm(&quote, &draft));
}

#[test]
fn minimum_lot_cannot_be_decremented() {
    let mut draft = OrderDraft::new(Side::Buy);
    draft.lot = LotSize::MIN;
    draft.decrement_lot();
    assert_eq!(draft.lot, LotSize::MIN);
    assert_eq!(draft.lot.to_string(), "0.01");
}

#[test]
fn confirmation_snapshot_ignores_later_ticks() {
    let calc = OrderCalculator::default();
    let mut sim = QuoteSimulator::seeded(11);
    let mut quote = Quote::new("EURUSD", 1.17974, 0.0002).unwrap();
    let draft = OrderDraft::new(Side::Buy);

    let ticket = calc.confirm(&quote, &draft).unwrap();
    for _ in 0..10 {
        quote = sim.next_quote(&quote);
    }

    assert_eq!(ticket.entry_price, 1.17984);
    assert!(ticket.stop_loss.is_none());
    assert!(ticket.take_profit.is_none());
}
