// crates/fxdesk-terminal/src/components/order_ticket.rs

use fxdesk_core::rounding::{format_money, format_rate, format_units};
use fxdesk_core::Side;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::panel_border;
use crate::app::{App, InputMode, Panel};

pub fn draw_order_ticket(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Order Ticket ")
        .borders(Borders::ALL)
        .border_style(panel_border(app, Panel::Ticket));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let (Some(draft), Some(figures)) = (app.draft.as_ref(), app.figures()) else {
        let hint = Paragraph::new("[B]uy / [S]ell to open a ticket")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(hint, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Side and rate
            Constraint::Length(3), // Lot stepper
            Constraint::Min(6),    // Figures
            Constraint::Length(1), // Actions
        ])
        .split(inner);

    // Side and current rate
    let side_color = match draft.side {
        Side::Buy => Color::Green,
        Side::Sell => Color::Red,
    };
    let side_line = Line::from(vec![
        Span::styled(
            format!("{} {}", draft.side.label(), app.instrument.symbol),
            Style::default().fg(side_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format_rate(figures.market_rate),
            Style::default().fg(side_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" current rate", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(
        Paragraph::new(side_line).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    // Lot stepper
    let editing = matches!(app.input_mode, InputMode::Editing) && app.current_panel == Panel::Ticket;
    let lot_text = if editing {
        format!("{}_", app.input_buffer)
    } else {
        draft.lot.to_string()
    };
    let spec = app.calculator.spec();
    let stepper = vec![
        Line::from(vec![
            Span::raw("Volume in lot:  [-] "),
            Span::styled(lot_text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" [+]"),
        ]),
        Line::from(Span::styled(
            format!(
                "1 lot = {} {}",
                format_units(spec.contract_size),
                app.instrument.base_currency()
            ),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(stepper).block(Block::default().borders(Borders::BOTTOM)),
        chunks[1],
    );

    // Figures
    let margin = figures.margin;
    let funds_style = if margin.is_overextended() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let items = vec![
        ListItem::new(format!(
            "Lot Value:        {} {}",
            format_units(margin.lot_value),
            app.instrument.base_currency()
        )),
        ListItem::new(format!("Pips Value:       {}", format_money(margin.pip_value))),
        ListItem::new(format!("Required Margin:  {}", format_money(margin.required_margin))),
        ListItem::new(format!("Available Funds:  {}", format_money(margin.available_funds)))
            .style(funds_style),
        ListItem::new(format!("Leverage:         1:{}", spec.leverage)),
    ];
    f.render_widget(List::new(items), chunks[2]);

    // Actions
    let action = format!(
        "[Enter] {} @ {} | [e] Edit | [Esc] Close",
        draft.side.label(),
        format_rate(if draft.pending.enabled {
            draft.pending.price
        } else {
            figures.market_rate
        })
    );
    f.render_widget(
        Paragraph::new(action)
            .style(Style::default().fg(side_color))
            .alignment(Alignment::Center),
        chunks[3],
    );
}
