// crates/fxdesk-terminal/src/components/mod.rs

pub mod confirmations;
pub mod help;
pub mod instrument_list;
pub mod order_ticket;
pub mod protective;
pub mod quote_board;
pub mod status_bar;

use ratatui::style::{Color, Style};

use crate::app::{App, Panel};

/// Yellow border on the focused panel.
pub(crate) fn panel_border(app: &App, panel: Panel) -> Style {
    Style::default().fg(if app.current_panel == panel {
        Color::Yellow
    } else {
        Color::White
    })
}
