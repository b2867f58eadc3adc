// crates/fxdesk-terminal/src/components/quote_board.rs

use fxdesk_core::rounding::format_rate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw_quote_board(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    // Left: instrument
    let instrument = app.instrument;
    let change_color = if instrument.change >= 0.0 { Color::Green } else { Color::Red };
    let left = Line::from(vec![
        Span::styled(
            instrument.symbol,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} ", instrument.category.label())),
        Span::styled(format!("{:+.2}%", instrument.change), Style::default().fg(change_color)),
    ]);
    f.render_widget(
        Paragraph::new(left).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    // Center: Sell | spread | Buy
    let spread_pips = app.quote.spread_pips(app.calculator.spec().pip_size);
    let center = Line::from(vec![
        Span::raw("Sell "),
        Span::styled(
            format_rate(app.quote.bid()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  [{}]  ", spread_pips), Style::default().fg(Color::Gray)),
        Span::styled(
            format_rate(app.quote.ask()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Buy"),
    ]);
    f.render_widget(
        Paragraph::new(center)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    // Right: feed activity
    let updated = app
        .last_update
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());
    let right = format!("Ticks: {} | Last: {}", app.tick_count, updated);
    f.render_widget(
        Paragraph::new(right)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );
}
