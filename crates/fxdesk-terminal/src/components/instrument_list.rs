// crates/fxdesk-terminal/src/components/instrument_list.rs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::panel_border;
use crate::app::{App, Panel};

pub fn draw_instrument_list(f: &mut Frame, area: Rect, app: &App) {
    let mut items = Vec::new();
    let mut index = 0;

    for (category, instruments) in &app.instruments {
        items.push(ListItem::new(Line::from(Span::styled(
            category.label(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ))));

        for instrument in instruments {
            let marker = if instrument.symbol == app.instrument.symbol { "*" } else { " " };
            let mut style = Style::default();
            if index == app.highlighted_instrument && app.current_panel == Panel::Instruments {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            let change_color = if instrument.change >= 0.0 { Color::Green } else { Color::Red };

            items.push(
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} {:<8}", marker, instrument.symbol)),
                    Span::styled(
                        format!("{:+.2}%", instrument.change),
                        Style::default().fg(change_color),
                    ),
                ]))
                .style(style),
            );
            index += 1;
        }
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Instruments ")
            .borders(Borders::ALL)
            .border_style(panel_border(app, Panel::Instruments)),
    );
    f.render_widget(list, area);
}
