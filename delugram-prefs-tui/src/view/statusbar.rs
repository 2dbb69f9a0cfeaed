//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use delugram_prefs_core::types::EntryKind;

use super::theme::{colors, Styles};
use crate::model::{App, StatusKind};

pub fn render<K: EntryKind>(app: &App<K>, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc, enabled)) in hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        if enabled {
            spans.push(Span::styled(key, Styles::hint_key()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(desc, Styles::hint_desc()));
        } else {
            spans.push(Span::styled(format!("{key} {desc}"), Styles::hint_disabled()));
        }
    }

    if let Some(status) = &app.status {
        let c = colors();
        let color = match status.kind {
            StatusKind::Progress => c.warning,
            StatusKind::Info => c.success,
            StatusKind::Error => c.error,
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(status.message.clone(), Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);
}

/// Key hints for the current state: (key, description, enabled)
fn hints<K: EntryKind>(app: &App<K>) -> Vec<(&'static str, &'static str, bool)> {
    if app.is_add_open() {
        return vec![
            ("Tab", "Next Field", true),
            ("Enter", "Add", true),
            ("Esc", "Cancel", true),
        ];
    }

    vec![
        ("Tab", "Focus", true),
        ("Ctrl+s", "Apply", true),
        ("Alt+a", "Add", true),
        ("Alt+d", "Remove", app.controller().remove_enabled()),
        ("F5", "Reload", true),
        ("F1", "Help", true),
        ("Alt+q", "Quit", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use delugram_prefs_core::types::Chats;

    #[test]
    fn remove_hint_disabled_without_selection() {
        let app = create_test_app::<Chats>();
        let remove = hints(&app)
            .into_iter()
            .find(|(_, desc, _)| *desc == "Remove")
            .unwrap();
        assert!(!remove.2);
    }

    #[test]
    fn add_window_shows_its_own_hints() {
        let mut app = create_test_app::<Chats>();
        app.prefs.page.open_add();
        assert!(hints(&app).iter().any(|(_, desc, _)| *desc == "Cancel"));
    }
}
