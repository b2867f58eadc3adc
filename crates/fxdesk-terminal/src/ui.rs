// crates/fxdesk-terminal/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::components::{
    confirmations::draw_confirmations,
    help::draw_help,
    instrument_list::draw_instrument_list,
    order_ticket::draw_order_ticket,
    protective::draw_protective_panels,
    quote_board::draw_quote_board,
    status_bar::draw_status_bar,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Quote board
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_quote_board(f, chunks[0], app);
    draw_main_content(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()));
    }
}

fn draw_main_content(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // Instruments
            Constraint::Percentage(40), // Ticket
            Constraint::Percentage(35), // SL / TP / pending
        ])
        .split(area);

    // Left: catalog on top, confirmed tickets below
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[0]);

    draw_instrument_list(f, left_chunks[0], app);
    draw_confirmations(f, left_chunks[1], app);
    draw_order_ticket(f, chunks[1], app);
    draw_protective_panels(f, chunks[2], app);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
