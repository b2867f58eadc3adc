// crates/fxdesk-terminal/src/feed.rs

//! Periodic quote feed.
//!
//! One tokio task owns the simulator and publishes a fresh [`Quote`]
//! on every tick of a fixed interval. The UI drains the channel from
//! its own loop, so quotes are applied one at a time on the UI side.
//!
//! The task lives exactly as long as the [`QuoteFeed`] handle: stopping
//! or dropping the handle aborts it. It also ends by itself once the
//! receiving side is gone.

use fxdesk_core::{Quote, QuoteSimulator};
use rand::Rng;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

pub struct QuoteFeed {
    symbol: String,
    handle: JoinHandle<()>,
}

impl QuoteFeed {
    /// Start ticking from `initial`. The first quote is published one
    /// `period` after spawning.
    pub fn spawn<R>(
        initial: Quote,
        mut simulator: QuoteSimulator<R>,
        period: Duration,
        tx: UnboundedSender<Quote>,
    ) -> Self
    where
        R: Rng + Send + 'static,
    {
        let symbol = initial.symbol().to_string();
        info!("Starting quote feed for {} every {:?}", symbol, period);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval completes immediately.
            ticker.tick().await;

            let mut quote = initial;
            loop {
                ticker.tick().await;
                quote = simulator.next_quote(&quote);
                debug!("Tick {} mid={}", quote.symbol(), quote.mid_price());

                if tx.send(quote.clone()).is_err() {
                    debug!("Quote receiver dropped, feed for {} exiting", quote.symbol());
                    break;
                }
            }
        });

        QuoteFeed { symbol, handle }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel the feed. No quote is published after this returns.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for QuoteFeed {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            info!("Stopping quote feed for {}", self.symbol);
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn eurusd() -> Quote {
        Quote::new("EURUSD", 1.17974, 0.0002).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_one_quote_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let feed = QuoteFeed::spawn(
            eurusd(),
            QuoteSimulator::seeded(5),
            Duration::from_millis(1500),
            tx,
        );

        let start = tokio::time::Instant::now();
        let mut expected = QuoteSimulator::seeded(5);
        let mut reference = eurusd();
        for n in 1..=3u32 {
            let quote = rx.recv().await.unwrap();
            reference = expected.next_quote(&reference);
            assert_eq!(quote, reference);
            let elapsed = start.elapsed();
            assert!(elapsed >= Duration::from_millis(1500) * n);
            assert!(elapsed < Duration::from_millis(1500) * (n + 1));
        }

        assert_eq!(feed.symbol(), "EURUSD");
        feed.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_closes_the_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let feed = QuoteFeed::spawn(
            eurusd(),
            QuoteSimulator::seeded(9),
            Duration::from_millis(1500),
            tx,
        );

        assert!(rx.recv().await.is_some());
        feed.stop();
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn exits_when_receiver_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        let feed = QuoteFeed::spawn(
            eurusd(),
            QuoteSimulator::seeded(1),
            Duration::from_millis(10),
            tx,
        );
        drop(rx);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(feed.is_finished());
    }
}
