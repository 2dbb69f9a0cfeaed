//! View layer
//!
//! ```text
//! ┌ title bar ─────────────────────────────┐
//! │ Telegram Token                         │
//! │ Admin Chat ID                          │
//! │ Allowed chats                          │
//! │   ...                                  │
//! └ status bar: hints │ last notice ───────┘
//! ```
//!
//! Reads the model only. The add window and the help overlay are drawn last,
//! on top of the page.

mod modal;
mod page;
mod statusbar;
mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use delugram_prefs_core::types::EntryKind;

use crate::model::App;
use theme::Styles;

pub fn render<K: EntryKind>(app: &App<K>, frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(1),    // page
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_title_bar(app, frame, rows[0]);
    page::render(app, frame, rows[1]);
    statusbar::render(app, frame, rows[2]);

    if app.is_add_open() {
        modal::render_add(app, frame);
    }
    if app.show_help {
        modal::render_help(frame);
    }
}

fn render_title_bar<K: EntryKind>(app: &App<K>, frame: &mut Frame, area: Rect) {
    let page = app.host.page().unwrap_or_else(|| "disabled".to_string());
    let title = Paragraph::new(format!(
        " Delugram Preferences · {page} · {} allow-list",
        K::LABEL
    ))
    .style(Styles::title_bar());
    frame.render_widget(title, area);
}
