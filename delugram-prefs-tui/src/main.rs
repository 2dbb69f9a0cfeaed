//! Delugram preferences TUI
//!
//! Elm architecture:
//! - **Model**: `model/` (page + focus + status)
//! - **Message**: `message/`
//! - **Update**: `update/`
//! - **View**: `view/`
//! - **Event**: `event/`
//!
//! The terminal plays the preferences host: the plugin registers its page and
//! hooks with [`host::TuiHost`], the page is shown once on startup, and
//! Ctrl+s fires the Apply hook.

mod app;
mod event;
mod host;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::Result;
use delugram_prefs_app::{create_client, ClientConfig, PrefsAppBuilder};
use delugram_prefs_core::traits::PrefsHook;
use delugram_prefs_core::types::{Chats, EntryKind, EntryKindId, Users};

use host::TuiHost;
use util::{init_logging, init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&ClientConfig::config_dir())?;

    let config = ClientConfig::load().await?;
    tracing::info!(
        backend = ?config.backend,
        entry_kind = %config.entry_kind,
        "starting Delugram preferences"
    );

    match config.entry_kind {
        EntryKindId::Chat => run_page::<Chats>(&config).await,
        EntryKindId::User => run_page::<Users>(&config).await,
    }
}

async fn run_page<K: EntryKind>(config: &ClientConfig) -> Result<()> {
    let host = Arc::new(TuiHost::new());
    let prefs = PrefsAppBuilder::<K>::new()
        .client(create_client::<K>(config)?)
        .host(host.clone())
        .build()?;

    let mut app = model::App::new(prefs, host);
    app.prefs.enable();
    app.prefs.on_hook(PrefsHook::ShowPrefs);

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal)?;

    app.prefs.disable();
    if let Err(e) = &result {
        tracing::error!("exited with error: {e:#}");
    }
    result
}
