// crates/fxdesk-terminal/src/main.rs

mod app;
mod components;
mod config;
mod feed;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fxdesk_core::{Quote, QuoteSimulator, Side};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{App, InputMode, Panel};
use crate::config::TerminalConfig;
use crate::feed::QuoteFeed;

#[derive(Parser)]
#[command(name = "fxdesk")]
#[command(about = "Simulated FX trading ticket with live margin and stop-loss / take-profit figures")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Instrument to open, e.g. EURUSD
    #[arg(short = 'y', long)]
    symbol: Option<String>,

    /// Fixed seed for the simulated quote stream
    #[arg(long)]
    seed: Option<u64>,

    /// Quote feed period in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Where logs go (the terminal itself is taken by the UI)
    #[arg(long, default_value = "fxdesk.log")]
    log_file: PathBuf,
}

impl Cli {
    fn load_config(&self) -> Result<TerminalConfig> {
        let mut config = TerminalConfig::load(self.config.as_deref())?;
        if let Some(symbol) = &self.symbol {
            config.symbol = symbol.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;
    let config = cli.load_config()?;
    let app = App::new(config.instrument()?, config.calculator()?)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
        },
    )?;

    let res = run_app(&mut terminal, app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

/// File logging, only when asked for with `--debug` or `RUST_LOG`.
fn init_logging(cli: &Cli) -> Result<()> {
    if !cli.debug && std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("opening log file {}", cli.log_file.display()))?;

    let default_level = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Run `setup`; if it fails, run `undo` before handing the error back.
fn undo_on_error<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    let result = setup();
    if result.is_err() {
        undo();
    }
    result
}

fn spawn_feed(config: &TerminalConfig, quote: Quote, tx: UnboundedSender<Quote>) -> Result<QuoteFeed> {
    let simulator = match config.seed {
        Some(seed) => QuoteSimulator::seeded(seed),
        None => QuoteSimulator::from_os_rng(),
    }
    .with_max_step(config.max_step)?;

    Ok(QuoteFeed::spawn(quote, simulator, config.tick_interval()?, tx))
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    config: &TerminalConfig,
) -> Result<()> {
    let (quote_tx, mut quote_rx) = mpsc::unbounded_channel::<Quote>();
    let mut feed = spawn_feed(config, app.quote.clone(), quote_tx.clone())?;
    info!("Trading view open on {}", app.instrument.symbol);

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            if app.show_help {
                                app.toggle_help();
                            } else if app.ticket_open() {
                                app.close_ticket();
                            }
                        }
                        KeyCode::Tab => {
                            app.next_panel();
                        }
                        KeyCode::BackTab => {
                            app.prev_panel();
                        }

                        // Ticket hotkeys
                        KeyCode::Char('b') | KeyCode::Char('B') => {
                            app.start_order_entry(Side::Buy);
                        }
                        KeyCode::Char('s') | KeyCode::Char('S') => {
                            app.start_order_entry(Side::Sell);
                        }
                        KeyCode::Char('+') | KeyCode::Char('=') => {
                            app.increase();
                        }
                        KeyCode::Char('-') | KeyCode::Char('_') => {
                            app.decrease();
                        }
                        KeyCode::Char('l') | KeyCode::Char('L') => {
                            app.toggle_stop_loss();
                        }
                        KeyCode::Char('t') | KeyCode::Char('T') => {
                            app.toggle_take_profit();
                        }
                        KeyCode::Char('o') | KeyCode::Char('O') => {
                            app.toggle_pending();
                        }
                        KeyCode::Char('u') | KeyCode::Char('U') => {
                            app.switch_unit();
                        }
                        KeyCode::Char('e') | KeyCode::Char('E') => {
                            app.start_editing();
                        }
                        KeyCode::Enter => {
                            if app.current_panel == Panel::Instruments {
                                app.select_highlighted_instrument();
                            } else {
                                app.confirm_order();
                            }
                        }

                        // Navigation
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.move_selection_up();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.move_selection_down();
                        }

                        KeyCode::F(1) | KeyCode::Char('?') => {
                            app.toggle_help();
                        }

                        _ => {}
                    },

                    InputMode::Editing => match key.code {
                        KeyCode::Enter => {
                            app.submit_input();
                        }
                        KeyCode::Esc => {
                            app.cancel_input();
                        }
                        KeyCode::Backspace => {
                            app.delete_char();
                        }
                        KeyCode::Char(c) => {
                            app.enter_char(c);
                        }
                        _ => {}
                    },
                }
            }
        }

        // Apply every quote that arrived since the last frame
        while let Ok(quote) = quote_rx.try_recv() {
            app.apply_quote(quote);
        }

        // A new instrument replaces the feed; the old task is aborted on drop
        if let Some((instrument, quote)) = app.take_instrument_switch() {
            info!("Restarting quote feed for {}", instrument.symbol);
            feed = spawn_feed(config, quote, quote_tx.clone())?;
        } else if feed.is_finished() {
            warn!("Quote feed for {} ended, restarting", feed.symbol());
            feed = spawn_feed(config, app.quote.clone(), quote_tx.clone())?;
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    info!("Closing trading view on {}", feed.symbol());
    feed.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn failed_setup_is_undone() {
        let mut undone = false;
        let result: Result<()> = undo_on_error(|| Err(anyhow!("no tty")), || undone = true);
        assert!(result.is_err());
        assert!(undone);
    }

    #[test]
    fn successful_setup_is_kept() {
        let mut undone = false;
        let result = undo_on_error(|| Ok(7), || undone = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!undone);
    }

    #[test]
    fn cli_overrides_config_values() {
        let cli = Cli::parse_from(["fxdesk", "--symbol", "gbpusd", "--seed", "3", "--tick-ms", "250"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.symbol, "gbpusd");
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.tick_interval_ms, 250);
    }
}
