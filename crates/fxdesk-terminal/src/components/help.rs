// crates/fxdesk-terminal/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, Color, &str)] = &[
    ("B/b", Color::Green, "Open Buy ticket"),
    ("S/s", Color::Red, "Open Sell ticket"),
    ("+/-", Color::Yellow, "Step lot, pips or price on the focused panel"),
    ("e", Color::Yellow, "Type a value for the focused panel"),
    ("L/l", Color::Cyan, "Toggle Stop Loss"),
    ("T/t", Color::Cyan, "Toggle Take Profit"),
    ("U/u", Color::Cyan, "Switch Pips / Price"),
    ("O/o", Color::Cyan, "Toggle Open-at-price"),
    ("Enter", Color::Green, "Confirm ticket / select instrument"),
    ("Esc", Color::Magenta, "Close ticket"),
    ("Tab", Color::Blue, "Next Panel"),
    ("Shift+Tab", Color::Blue, "Previous Panel"),
    ("↑/k ↓/j", Color::White, "Move in instrument list"),
    ("F1/?", Color::Gray, "Toggle Help"),
    ("Q/q", Color::Red, "Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(keys, color, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", keys),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {}", action)),
            ]))
        })
        .collect();

    let help_list = List::new(help_items).block(
        Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(help_list, area);

    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
