#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `PrefsAppBuilder` and `PrefsApp` against the in-memory server.

use std::sync::{Arc, Mutex};

use delugram_prefs_app::adapters::{InMemoryPrefsServer, DEFAULT_TELEGRAM_TOKEN};
use delugram_prefs_app::{create_client, Backend, ClientConfig, PrefsApp, PrefsAppBuilder};
use delugram_prefs_core::error::PrefsError;
use delugram_prefs_core::services::PAGE_NAME;
use delugram_prefs_core::traits::{PreferencesHost, PrefsHook};
use delugram_prefs_core::types::{Chats, ConfigValues, Entry, EntryKind, Users};

// ===== Mock Implementations =====

/// `PreferencesHost` that remembers what is registered.
#[derive(Default)]
struct RecordingHost {
    pages: Mutex<Vec<String>>,
    hooks: Mutex<Vec<PrefsHook>>,
}

impl PreferencesHost for RecordingHost {
    fn add_page(&self, name: &str) {
        self.pages.lock().unwrap().push(name.to_string());
    }

    fn remove_page(&self, name: &str) {
        self.pages.lock().unwrap().retain(|p| p != name);
    }

    fn register_hook(&self, hook: PrefsHook) {
        self.hooks.lock().unwrap().push(hook);
    }

    fn deregister_hook(&self, hook: PrefsHook) {
        self.hooks.lock().unwrap().retain(|h| *h != hook);
    }
}

fn build_app<K: EntryKind>(
    server: Arc<InMemoryPrefsServer>,
) -> (PrefsApp<K>, Arc<RecordingHost>) {
    let host = Arc::new(RecordingHost::default());
    let app = PrefsAppBuilder::<K>::new()
        .client(server)
        .host(host.clone())
        .build()
        .expect("build app");
    (app, host)
}

// ===== Builder =====

#[test]
fn build_requires_client() {
    let result = PrefsAppBuilder::<Chats>::new()
        .host(Arc::new(RecordingHost::default()))
        .build();
    assert!(matches!(result, Err(PrefsError::Config(_))));
}

#[test]
fn build_requires_host() {
    let result = PrefsAppBuilder::<Chats>::new()
        .client(Arc::new(InMemoryPrefsServer::new()))
        .build();
    assert!(matches!(result, Err(PrefsError::Config(_))));
}

#[test]
fn custom_page_name_is_registered() {
    let host = Arc::new(RecordingHost::default());
    let mut app = PrefsAppBuilder::<Chats>::default()
        .client(Arc::new(InMemoryPrefsServer::new()))
        .host(host.clone())
        .page_name("Delugram Users")
        .build()
        .unwrap();

    app.enable();
    assert_eq!(*host.pages.lock().unwrap(), vec!["Delugram Users".to_string()]);
}

#[test]
fn memory_backend_client_is_created() {
    let config = ClientConfig {
        backend: Backend::Memory,
        ..ClientConfig::default()
    };
    assert!(create_client::<Users>(&config).is_ok());
}

// ===== Activation =====

#[test]
fn enable_registers_page_and_hooks_once() {
    let (mut app, host) = build_app::<Chats>(Arc::new(InMemoryPrefsServer::new()));

    app.enable();
    app.enable();

    assert_eq!(*host.pages.lock().unwrap(), vec![PAGE_NAME.to_string()]);
    assert_eq!(host.hooks.lock().unwrap().len(), 2);

    app.disable();
    assert!(host.pages.lock().unwrap().is_empty());
    assert!(host.hooks.lock().unwrap().is_empty());
}

#[test]
fn hooks_are_ignored_while_disabled() {
    let (mut app, _host) = build_app::<Chats>(Arc::new(InMemoryPrefsServer::new()));

    app.on_hook(PrefsHook::ShowPrefs);

    assert_eq!(app.page.in_flight(), 0);
    assert!(!app.page.controller().is_loaded());
}

// ===== Page flows =====

#[tokio::test]
async fn show_hook_loads_placeholders_and_entries() {
    let server = Arc::new(
        InMemoryPrefsServer::new().with_entries::<Chats>(vec![Entry::new("1", "Alice")]),
    );
    let (mut app, _host) = build_app::<Chats>(server);

    app.enable();
    app.on_hook(PrefsHook::ShowPrefs);
    app.page.settle().await;

    let controller = app.page.controller();
    assert!(controller.is_loaded());
    assert_eq!(controller.values().telegram_token, DEFAULT_TELEGRAM_TOKEN);
    assert_eq!(controller.entries(), &[Entry::new("1", "Alice")]);
    assert!(!controller.remove_enabled());
}

#[tokio::test]
async fn apply_hook_saves_edited_fields() {
    let server = Arc::new(InMemoryPrefsServer::new());
    let (mut app, _host) = build_app::<Chats>(server.clone());

    app.enable();
    app.on_hook(PrefsHook::ShowPrefs);
    app.page.settle().await;

    *app.page.controller_mut().values_mut() = ConfigValues::new("123:abc", "42");
    app.on_hook(PrefsHook::ApplyPrefs);
    app.page.settle().await;

    assert!(server.is_token_configured().await);
    let notices = app.page.controller_mut().take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message(), "Preferences saved");
    assert_eq!(app.page.controller().values().admin_chat_id, "42");
}

#[tokio::test]
async fn add_then_remove_round_trips_through_server() {
    let server = Arc::new(InMemoryPrefsServer::new());
    let (mut app, _host) = build_app::<Users>(server.clone());
    app.enable();
    app.on_hook(PrefsHook::ShowPrefs);
    app.page.settle().await;

    app.page.open_add();
    {
        let draft = app.page.controller_mut().add_draft_mut().unwrap();
        draft.id = "7".to_string();
        draft.name = "Bob".to_string();
    }
    app.page.submit_add().unwrap();
    assert!(!app.page.controller().is_add_open());
    app.page.settle().await;

    assert_eq!(app.page.controller().entries(), &[Entry::new("7", "Bob")]);
    assert_eq!(server.entries::<Users>().await, vec![Entry::new("7", "Bob")]);
    assert!(server.entries::<Chats>().await.is_empty());

    assert!(app.page.select(Some(0)));
    app.page.remove_selected().unwrap();
    app.page.settle().await;

    assert!(app.page.controller().entries().is_empty());
    assert!(!app.page.controller().remove_enabled());
}

#[tokio::test]
async fn rejected_add_leaves_list_unchanged_and_reports() {
    let server = Arc::new(
        InMemoryPrefsServer::new().with_entries::<Chats>(vec![Entry::new("1", "Alice")]),
    );
    let (mut app, _host) = build_app::<Chats>(server);
    app.enable();
    app.on_hook(PrefsHook::ShowPrefs);
    app.page.settle().await;
    app.page.controller_mut().take_notices();

    app.page.open_add();
    app.page.submit_add().unwrap();
    app.page.settle().await;

    let notices = app.page.controller_mut().take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    assert!(notices[0].message().contains("Invalid Chat ID or Name"));
    assert_eq!(app.page.controller().entries(), &[Entry::new("1", "Alice")]);
}

#[tokio::test]
async fn duplicate_add_reports_and_reloads() {
    let server = Arc::new(
        InMemoryPrefsServer::new().with_entries::<Chats>(vec![Entry::new("1", "Alice")]),
    );
    let (mut app, _host) = build_app::<Chats>(server);
    app.enable();

    app.page.open_add();
    {
        let draft = app.page.controller_mut().add_draft_mut().unwrap();
        draft.id = "1".to_string();
        draft.name = "Again".to_string();
    }
    app.page.submit_add().unwrap();
    app.page.settle().await;

    let notices = app.page.controller_mut().take_notices();
    assert_eq!(notices.len(), 1);
    assert!(!notices[0].is_error());
    assert_eq!(app.page.controller().entries(), &[Entry::new("1", "Alice")]);
}

#[tokio::test]
async fn failed_remove_is_reported_without_reload() {
    let server = Arc::new(
        InMemoryPrefsServer::new().with_entries::<Chats>(vec![Entry::new("1", "Alice")]),
    );
    let (mut app, _host) = build_app::<Chats>(server.clone());
    app.enable();
    app.on_hook(PrefsHook::ShowPrefs);
    app.page.settle().await;

    server.fail_next(Chats::REMOVE_METHOD).await;
    app.page.select(Some(0));
    app.page.remove_selected().unwrap();
    app.page.settle().await;

    let notices = app.page.controller_mut().take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    assert_eq!(app.page.controller().entries().len(), 1);
    assert!(app.page.controller().remove_enabled());
}

#[tokio::test]
async fn remove_without_selection_is_refused() {
    let (mut app, _host) = build_app::<Chats>(Arc::new(InMemoryPrefsServer::new()));
    assert_eq!(app.page.remove_selected(), Err(PrefsError::NoSelection));
    assert_eq!(app.page.in_flight(), 0);
}
