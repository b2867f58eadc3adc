// crates/fxdesk-terminal/src/components/confirmations.rs

use fxdesk_core::{OrderKind, Side};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;

pub fn draw_confirmations(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Time", "Side", "Lots", "Symbol", "Entry"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .confirmations
        .iter()
        .take(10)
        .map(|confirmed| {
            let ticket = &confirmed.ticket;
            let side_style = match ticket.side {
                Side::Buy => Style::default().fg(Color::Green),
                Side::Sell => Style::default().fg(Color::Red),
            };
            let entry = match ticket.kind {
                OrderKind::Market => format!("{:.5}", ticket.entry_price),
                OrderKind::Pending => format!("{:.5}*", ticket.entry_price),
            };

            Row::new(vec![
                Cell::from(confirmed.timestamp.format("%H:%M:%S").to_string()),
                Cell::from(ticket.side.label()).style(side_style),
                Cell::from(ticket.lot_size.to_string()),
                Cell::from(ticket.symbol.clone()),
                Cell::from(entry),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Min(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Confirmed ").borders(Borders::ALL));

    f.render_widget(table, area);
}
