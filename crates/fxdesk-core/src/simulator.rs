//! Random-walk quote simulator.
//!
//! Each tick moves the mid price by a uniformly distributed delta in
//! `[-max_step, +max_step)` and rounds the result to 5 decimals. The
//! random source is a type parameter, so tests run on a seeded
//! [`StdRng`] and get the same walk every time.
//!
//! Scheduling is not done here; the terminal's quote feed calls
//! [`QuoteSimulator::next_quote`] on its timer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ensure_positive, CalcError};
use crate::quote::Quote;
use crate::rounding::round_rate;

/// Largest move per tick.
pub const DEFAULT_MAX_STEP: f64 = 0.00015;

#[derive(Debug, Clone)]
pub struct QuoteSimulator<R = StdRng> {
    rng: R,
    max_step: f64,
}

impl QuoteSimulator<StdRng> {
    /// Reproducible walk.
    pub fn seeded(seed: u64) -> Self {
        QuoteSimulator::new(StdRng::seed_from_u64(seed))
    }

    /// Walk seeded from the operating system.
    pub fn from_os_rng() -> Self {
        QuoteSimulator::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> QuoteSimulator<R> {
    pub fn new(rng: R) -> Self {
        QuoteSimulator {
            rng,
            max_step: DEFAULT_MAX_STEP,
        }
    }

    pub fn with_max_step(mut self, max_step: f64) -> Result<Self, CalcError> {
        self.max_step = ensure_positive("max_step", max_step)?;
        Ok(self)
    }

    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    /// Next mid price after `previous`.
    ///
    /// A step that would take the price to zero or below is dropped and
    /// `previous` is returned unchanged.
    pub fn tick(&mut self, previous: f64) -> f64 {
        let delta = self.rng.random_range(-self.max_step..self.max_step);
        let next = round_rate(previous + delta);
        if next > 0.0 {
            next
        } else {
            previous
        }
    }

    /// Next quote for the same symbol and spread.
    pub fn next_quote(&mut self, quote: &Quote) -> Quote {
        quote.with_mid(self.tick(quote.mid_price()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_walks_are_reproducible() {
        let mut a = QuoteSimulator::seeded(7);
        let mut b = QuoteSimulator::seeded(7);
        let (mut pa, mut pb) = (1.17974, 1.17974);
        for _ in 0..50 {
            pa = a.tick(pa);
            pb = b.tick(pb);
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn ticks_stay_within_step_and_are_rounded() {
        let mut sim = QuoteSimulator::seeded(42);
        let mut price = 1.17974;
        for _ in 0..1_000 {
            let next = sim.tick(price);
            // Rounding to 5 decimals can add at most half a tenth-pip.
            assert!((next - price).abs() <= DEFAULT_MAX_STEP + 0.000_005 + 1e-12);
            let scaled = next * 100_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
            price = next;
        }
    }

    #[test]
    fn price_never_goes_non_positive() {
        let mut sim = QuoteSimulator::seeded(1).with_max_step(1.0).unwrap();
        let mut price = 0.00001;
        for _ in 0..500 {
            price = sim.tick(price);
            assert!(price > 0.0);
        }
    }

    #[test]
    fn next_quote_keeps_symbol_and_spread() {
        let mut sim = QuoteSimulator::seeded(3);
        let quote = Quote::new("GBPUSD", 1.35062, 0.00039).unwrap();
        let next = sim.next_quote(&quote);
        assert_eq!(next.symbol(), "GBPUSD");
        assert_eq!(next.spread(), 0.00039);
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(QuoteSimulator::seeded(1).with_max_step(0.0).is_err());
    }
}
