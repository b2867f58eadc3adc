// crates/fxdesk-terminal/src/components/protective.rs

use fxdesk_core::protective::ProtectiveUnit;
use fxdesk_core::rounding::{format_money, format_rate};
use fxdesk_core::{ProtectiveKind, ProtectiveLevel, ProtectiveOutcome};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::panel_border;
use crate::app::{App, InputMode, Panel};

pub fn draw_protective_panels(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(37),
            Constraint::Percentage(37),
            Constraint::Percentage(26),
        ])
        .split(area);

    let (draft, figures) = match (app.draft.as_ref(), app.figures()) {
        (Some(draft), Some(figures)) => (draft, figures),
        _ => {
            for (chunk, title, panel) in [
                (chunks[0], " Stop loss ", Panel::StopLoss),
                (chunks[1], " Take profit ", Panel::TakeProfit),
                (chunks[2], " Open order when price is ", Panel::Pending),
            ] {
                let block = Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(panel_border(app, panel));
                f.render_widget(block, chunk);
            }
            return;
        }
    };

    draw_level(
        f,
        chunks[0],
        app,
        Panel::StopLoss,
        ProtectiveKind::StopLoss,
        &draft.stop_loss,
        &figures.stop_loss,
        "[l] Toggle",
    );
    draw_level(
        f,
        chunks[1],
        app,
        Panel::TakeProfit,
        ProtectiveKind::TakeProfit,
        &draft.take_profit,
        &figures.take_profit,
        "[t] Toggle",
    );

    // Pending entry
    let editing = is_editing(app, Panel::Pending);
    let mut lines = vec![toggle_line(draft.pending.enabled, "[o] Toggle")];
    if draft.pending.enabled {
        let price = if editing {
            format!("{}_", app.input_buffer)
        } else {
            format_rate(draft.pending.price)
        };
        lines.push(Line::from(vec![
            Span::raw("Price: [-] "),
            Span::styled(price, Style::default().fg(Color::Cyan)),
            Span::raw(" [+]"),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Open order when price is ")
                .borders(Borders::ALL)
                .border_style(panel_border(app, Panel::Pending)),
        ),
        chunks[2],
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_level(
    f: &mut Frame,
    area: Rect,
    app: &App,
    panel: Panel,
    kind: ProtectiveKind,
    level: &ProtectiveLevel,
    outcome: &ProtectiveOutcome,
    toggle_hint: &str,
) {
    let amount_color = match kind {
        ProtectiveKind::StopLoss => Color::Red,
        ProtectiveKind::TakeProfit => Color::Green,
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{}: ", kind.label())),
            Span::styled(
                format_money(outcome.amount),
                Style::default().fg(amount_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        toggle_line(level.enabled, toggle_hint),
    ];

    if level.enabled {
        let value = if is_editing(app, panel) {
            format!("{}_", app.input_buffer)
        } else {
            match level.unit {
                ProtectiveUnit::Pips => level.pips.to_string(),
                ProtectiveUnit::Price => format_rate(level.price),
            }
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", level.unit.label()), Style::default().fg(Color::Gray)),
            Span::raw("[-] "),
            Span::styled(value, Style::default().fg(Color::Cyan)),
            Span::raw(" [+]  "),
            Span::styled("[u] Unit", Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("Rate: "),
            Span::styled(format_rate(outcome.rate), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  ({:.1} pips)", outcome.pips), Style::default().fg(Color::Gray)),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", kind.label()))
                .borders(Borders::ALL)
                .border_style(panel_border(app, panel)),
        ),
        area,
    );
}

fn toggle_line(enabled: bool, hint: &str) -> Line<'static> {
    let (label, color) = if enabled { ("ON ", Color::Green) } else { ("OFF", Color::Gray) };
    Line::from(vec![
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", hint), Style::default().fg(Color::Gray)),
    ])
}

fn is_editing(app: &App, panel: Panel) -> bool {
    matches!(app.input_mode, InputMode::Editing) && app.current_panel == panel
}
