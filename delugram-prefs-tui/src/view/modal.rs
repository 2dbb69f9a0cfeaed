//! Add window and help overlay

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use delugram_prefs_core::types::EntryKind;

use super::theme::Styles;
use crate::model::{AddField, App};

const HELP: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Move between token, admin chat id and list"),
    ("Ctrl+s", "Apply the token and admin chat id"),
    ("F5 / Alt+r", "Reload from the server"),
    ("Alt+a / a", "Open the add window"),
    ("Alt+d / Del", "Remove the selected entry"),
    ("↑↓ / j k", "Select in the list"),
    ("Home / End", "First / last entry"),
    ("Esc", "Clear the status line"),
    ("Alt+q / Ctrl+c", "Quit"),
];

/// Centered area of at most `width` x `height`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render_add<K: EntryKind>(app: &App<K>, frame: &mut Frame) {
    let Some(draft) = app.controller().add_flow().and_then(|flow| flow.draft()) else {
        return;
    };

    let area = centered_rect(50, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Add {} ", K::LABEL))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = K::title_label();
    let fields = [
        (AddField::Id, format!("{label} ID"), draft.id.as_str()),
        (AddField::Name, "Name".to_string(), draft.name.as_str()),
    ];

    let mut lines = Vec::new();
    let mut cursor = None;
    for (field, title, value) in fields {
        let focused = app.add_field == field;
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(Span::styled(title, Style::default().fg(Color::Gray))));
        if focused {
            let row = u16::try_from(lines.len()).unwrap_or(0);
            let col = u16::try_from(value.width() + 2).unwrap_or(u16::MAX);
            cursor = Some(Position::new(
                inner.x.saturating_add(col).min(inner.right().saturating_sub(1)),
                inner.y + row,
            ));
        }
        lines.push(Line::styled(format!("  {value}"), style));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Enter", Styles::hint_key()),
        Span::raw(" add   "),
        Span::styled("Esc", Styles::hint_key()),
        Span::raw(" cancel   "),
        Span::styled("Tab", Styles::hint_key()),
        Span::raw(" switch field"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

pub fn render_help(frame: &mut Frame) {
    let height = u16::try_from(HELP.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(64, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let mut lines: Vec<Line> = HELP
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:<18}"), Styles::hint_key()),
                Span::styled(*desc, Styles::hint_desc()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled("Press any key to close", Styles::muted()));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
