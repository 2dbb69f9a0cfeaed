//! Test helpers: an app wired to the in-memory server and key builders.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent};
use delugram_prefs_app::adapters::InMemoryPrefsServer;
use delugram_prefs_app::PrefsAppBuilder;
use delugram_prefs_core::types::{Entry, EntryKind};

use crate::host::TuiHost;
use crate::model::App;

pub fn create_test_app<K: EntryKind>() -> App<K> {
    create_test_app_with::<K>(InMemoryPrefsServer::new()).0
}

/// Enabled app over `server`; the server handle stays usable for assertions
pub fn create_test_app_with<K: EntryKind>(
    server: InMemoryPrefsServer,
) -> (App<K>, Arc<InMemoryPrefsServer>) {
    let server = Arc::new(server);
    let host = Arc::new(TuiHost::new());
    let prefs = PrefsAppBuilder::<K>::new()
        .client(server.clone())
        .host(host.clone())
        .build()
        .expect("build prefs app");
    let mut app = App::new(prefs, host);
    app.prefs.enable();
    (app, server)
}

pub fn entries(items: &[(&str, &str)]) -> Vec<Entry> {
    items.iter().map(|(id, name)| Entry::new(*id, *name)).collect()
}

pub fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::from(code))
}
