//! Single-threaded driver for one preferences page
//!
//! Every RPC is fire-and-forget from the caller's point of view: intents push a
//! future into `in_flight` and return at once. Responses are applied one at a
//! time by [`PreferencesPage::next_outcome`], on whichever task polls the page,
//! in the order they arrive. Nothing here spawns, so the model has exactly one
//! writer.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::error::PrefsResult;
use crate::services::{AllowListController, Command, Outcome};
use crate::traits::RemoteConfigClient;
use crate::types::{ConfigValues, EntryKind};

/// A preferences page bound to its remote store
pub struct PreferencesPage<K: EntryKind> {
    controller: AllowListController<K>,
    client: Arc<dyn RemoteConfigClient<K>>,
    in_flight: FuturesUnordered<BoxFuture<'static, Outcome>>,
}

impl<K: EntryKind> PreferencesPage<K> {
    /// Create a page talking to `client`
    #[must_use]
    pub fn new(client: Arc<dyn RemoteConfigClient<K>>) -> Self {
        Self {
            controller: AllowListController::new(),
            client,
            in_flight: FuturesUnordered::new(),
        }
    }

    pub fn controller(&self) -> &AllowListController<K> {
        &self.controller
    }

    /// Mutable access for form editing (scalar fields, add draft)
    pub fn controller_mut(&mut self) -> &mut AllowListController<K> {
        &mut self.controller
    }

    // ===== Intents =====

    pub fn show(&mut self) {
        let cmd = self.controller.on_show();
        self.dispatch(cmd);
    }

    pub fn reload(&mut self) {
        let cmd = self.controller.reload();
        self.dispatch(cmd);
    }

    /// Save the scalar fields currently in the form
    pub fn save(&mut self) {
        let values = self.controller.values().clone();
        self.save_values(values);
    }

    pub fn save_values(&mut self, values: ConfigValues) {
        let cmd = self.controller.on_save(values);
        self.dispatch(cmd);
    }

    pub fn open_add(&mut self) {
        self.controller.on_add();
    }

    pub fn submit_add(&mut self) -> PrefsResult<()> {
        let cmd = self.controller.submit_add()?;
        self.dispatch(cmd);
        Ok(())
    }

    pub fn cancel_add(&mut self) {
        self.controller.cancel_add();
    }

    pub fn remove_selected(&mut self) -> PrefsResult<()> {
        let cmd = self.controller.on_remove()?;
        self.dispatch(cmd);
        Ok(())
    }

    /// Returns whether remove is enabled afterwards
    pub fn select(&mut self, index: Option<usize>) -> bool {
        self.controller.on_selection_change(index)
    }

    pub fn select_next(&mut self) -> bool {
        self.controller.select_next()
    }

    pub fn select_previous(&mut self) -> bool {
        self.controller.select_previous()
    }

    // ===== Responses =====

    /// Wait for the next response and apply it.
    ///
    /// Returns `false` when nothing is in flight. Cancel-safe: dropping the
    /// future before it resolves loses no response.
    pub async fn next_outcome(&mut self) -> bool {
        let Some(outcome) = self.in_flight.next().await else {
            return false;
        };
        if let Some(follow_up) = self.controller.apply(outcome) {
            self.dispatch(follow_up);
        }
        true
    }

    /// Apply responses until nothing is in flight, follow-up reloads included
    pub async fn settle(&mut self) {
        while self.next_outcome().await {}
    }

    /// Calls issued but not yet applied
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    fn dispatch(&mut self, command: Command) {
        log::debug!("dispatching {}", command.method::<K>());
        let client = Arc::clone(&self.client);
        self.in_flight.push(Box::pin(execute(client, command)));
    }
}

async fn execute<K: EntryKind>(client: Arc<dyn RemoteConfigClient<K>>, command: Command) -> Outcome {
    match command {
        Command::GetConfig { seq } => Outcome::Config {
            seq,
            result: client.get_config().await,
        },
        Command::SetConfig(values) => Outcome::Saved(client.set_config(&values).await),
        Command::AddEntry(entry) => {
            let result = client.add_entry(&entry.id, &entry.name).await;
            Outcome::Added { entry, result }
        }
        Command::RemoveEntry { id } => {
            let result = client.remove_entry(&id).await;
            Outcome::Removed { id, result }
        }
    }
}
