//! Preferences page: scalar fields and the entry list

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use delugram_prefs_core::types::EntryKind;

use super::theme::{colors, Styles};
use crate::model::{App, Focus};

pub fn render<K: EntryKind>(app: &App<K>, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // token
            Constraint::Length(3), // admin chat id
            Constraint::Min(3),    // entries
        ])
        .split(area);

    let values = app.controller().values();
    render_field(
        frame,
        rows[0],
        "Telegram Token",
        &values.telegram_token,
        app.focus == Focus::Token && !app.is_add_open(),
    );
    render_field(
        frame,
        rows[1],
        "Admin Chat ID",
        &values.admin_chat_id,
        app.focus == Focus::AdminChatId && !app.is_add_open(),
    );
    render_entries(app, frame, rows[2]);
}

/// One bordered single-line text field; the cursor follows the text when focused
fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let block = Block::default()
        .title(format!(" {label} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(value.to_string()).block(block), area);

    if focused {
        let width = u16::try_from(value.width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(width).min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn render_entries<K: EntryKind>(app: &App<K>, frame: &mut Frame, area: Rect) {
    let controller = app.controller();
    let focused = app.focus == Focus::List && !app.is_add_open();

    let block = Block::default()
        .title(format!(
            " Allowed {}s ({}) ",
            K::LABEL,
            controller.entries().len()
        ))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if !controller.is_loaded() {
        let text = if app.prefs.page.in_flight() > 0 {
            "Loading..."
        } else {
            "Not loaded. Press F5 to reload."
        };
        frame.render_widget(Paragraph::new(text).style(Styles::muted()).block(block), area);
        return;
    }

    if controller.entries().is_empty() {
        let text = format!("No {}s yet. Press Alt+a to add one.", K::LABEL);
        frame.render_widget(Paragraph::new(text).style(Styles::muted()).block(block), area);
        return;
    }

    let id_width = controller
        .entries()
        .iter()
        .map(|e| e.id.width())
        .max()
        .unwrap_or(0)
        .max(K::title_label().width() + 3);

    let items: Vec<ListItem> = controller
        .entries()
        .iter()
        .map(|entry| {
            let pad = id_width.saturating_sub(entry.id.width());
            ListItem::new(Line::from(vec![
                Span::styled(entry.id.clone(), Styles::title()),
                Span::raw(" ".repeat(pad + 2)),
                Span::styled(entry.name.clone(), Style::default().fg(colors().fg)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(controller.list().selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}
