//! Allow-list preferences controller
//!
//! Owns every piece of displayed state and decides which RPC to issue next.
//! It never performs I/O: intents return a [`Command`], and the result of each
//! command comes back as an [`Outcome`] through [`AllowListController::apply`].

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::{PrefsError, PrefsResult};
use crate::model::{AddEntryFlow, EntryDraft, EntryListModel};
use crate::types::{ConfigSnapshot, ConfigValues, Entry, EntryKind};

/// An RPC the controller wants issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `get_config`, tagged with its reload sequence number
    GetConfig { seq: u64 },
    /// `set_config`
    SetConfig(ConfigValues),
    /// `add_chat` / `add_user`
    AddEntry(Entry),
    /// `remove_chat` / `remove_user`
    RemoveEntry { id: String },
}

impl Command {
    /// RPC method name for entry kind `K`
    pub fn method<K: EntryKind>(&self) -> &'static str {
        match self {
            Self::GetConfig { .. } => "get_config",
            Self::SetConfig(_) => "set_config",
            Self::AddEntry(_) => K::ADD_METHOD,
            Self::RemoveEntry { .. } => K::REMOVE_METHOD,
        }
    }
}

/// The answer to a [`Command`]
#[derive(Debug, Clone)]
pub enum Outcome {
    Config {
        seq: u64,
        result: PrefsResult<ConfigSnapshot>,
    },
    Saved(PrefsResult<()>),
    Added {
        entry: Entry,
        result: PrefsResult<bool>,
    },
    Removed {
        id: String,
        result: PrefsResult<()>,
    },
}

/// User-visible feedback produced by an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Controller for one allow-list page, generic over the entry kind.
#[derive(Debug)]
pub struct AllowListController<K: EntryKind> {
    list: EntryListModel,
    /// Scalar form fields; overwritten by every applied snapshot
    values: ConfigValues,
    /// Created on the first add request and reused afterwards
    add_flow: Option<AddEntryFlow>,
    notices: VecDeque<Notice>,
    /// Sequence number of the newest reload issued
    issued_seq: u64,
    /// Sequence number of the snapshot currently displayed
    applied_seq: u64,
    _kind: PhantomData<K>,
}

impl<K: EntryKind> Default for AllowListController<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EntryKind> AllowListController<K> {
    pub fn new() -> Self {
        Self {
            list: EntryListModel::new(),
            values: ConfigValues::default(),
            add_flow: None,
            notices: VecDeque::new(),
            issued_seq: 0,
            applied_seq: 0,
            _kind: PhantomData,
        }
    }

    // ===== Intents =====

    /// The page became visible
    pub fn on_show(&mut self) -> Command {
        log::debug!("{} preferences shown, reloading", K::LABEL);
        self.reload()
    }

    /// Request a fresh snapshot. Overlapping reloads are allowed.
    pub fn reload(&mut self) -> Command {
        self.issued_seq += 1;
        Command::GetConfig {
            seq: self.issued_seq,
        }
    }

    /// Push the scalar fields to the server
    pub fn on_save(&self, values: ConfigValues) -> Command {
        Command::SetConfig(values)
    }

    /// Show the add window, creating it on first use
    pub fn on_add(&mut self) {
        let flow = self.add_flow.get_or_insert_with(AddEntryFlow::new);
        if !flow.open() {
            log::debug!("add {} window already open", K::LABEL);
        }
    }

    /// Submit the add window's draft
    pub fn submit_add(&mut self) -> PrefsResult<Command> {
        let flow = self.add_flow.as_mut().ok_or(PrefsError::AddWindowClosed)?;
        let entry = flow.submit()?;
        log::info!("adding {} {}", K::LABEL, entry.id);
        Ok(Command::AddEntry(entry))
    }

    /// Close the add window without sending anything
    pub fn cancel_add(&mut self) {
        if let Some(flow) = self.add_flow.as_mut() {
            flow.cancel();
        }
    }

    /// Remove the selected entry
    pub fn on_remove(&self) -> PrefsResult<Command> {
        let entry = self.list.selected().ok_or(PrefsError::NoSelection)?;
        log::info!("removing {} {}", K::LABEL, entry.id);
        Ok(Command::RemoveEntry {
            id: entry.id.clone(),
        })
    }

    /// Set the selection; returns whether the remove affordance is enabled
    pub fn on_selection_change(&mut self, index: Option<usize>) -> bool {
        self.list.select(index);
        self.remove_enabled()
    }

    pub fn select_next(&mut self) -> bool {
        self.list.select_next();
        self.remove_enabled()
    }

    pub fn select_previous(&mut self) -> bool {
        self.list.select_previous();
        self.remove_enabled()
    }

    // ===== Outcomes =====

    /// Apply the answer to a previously issued command.
    ///
    /// Returns the follow-up command, which is always a reload after a
    /// successful mutation and nothing otherwise.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Command> {
        match outcome {
            Outcome::Config { seq, result } => {
                match result {
                    Ok(snapshot) => self.apply_snapshot(seq, snapshot),
                    Err(e) => {
                        e.log("get_config failed");
                        self.notify_error(format!("Failed to load preferences: {e}"));
                    }
                }
                None
            }
            Outcome::Saved(result) => match result {
                Ok(()) => {
                    self.notices
                        .push_back(Notice::Info("Preferences saved".to_string()));
                    Some(self.reload())
                }
                Err(e) => {
                    e.log("set_config failed");
                    self.notify_error(format!("Failed to save preferences: {e}"));
                    None
                }
            },
            Outcome::Added { entry, result } => {
                let completed = self
                    .add_flow
                    .as_mut()
                    .is_some_and(|flow| flow.complete(&result));
                match result {
                    Ok(true) => {}
                    Ok(false) => self.notices.push_back(Notice::Info(format!(
                        "{} {} is already in the list",
                        K::LABEL,
                        entry.id
                    ))),
                    Err(e) => {
                        e.log(K::ADD_METHOD);
                        self.notify_error(format!("Failed to add {} {}: {e}", K::LABEL, entry.id));
                    }
                }
                completed.then(|| self.reload())
            }
            Outcome::Removed { id, result } => match result {
                Ok(()) => Some(self.reload()),
                Err(e) => {
                    e.log(K::REMOVE_METHOD);
                    self.notify_error(format!("Failed to remove {} {id}: {e}", K::LABEL));
                    None
                }
            },
        }
    }

    /// Scalars and list come from the same snapshot, assigned together.
    fn apply_snapshot(&mut self, seq: u64, snapshot: ConfigSnapshot) {
        if seq < self.applied_seq {
            log::debug!(
                "discarding stale snapshot #{seq}, #{} already displayed",
                self.applied_seq
            );
            return;
        }
        let (values, entries) = snapshot.into_parts();
        log::debug!("applying snapshot #{seq} with {} entries", entries.len());
        self.applied_seq = seq;
        self.values = values;
        self.list.replace_all(entries);
    }

    fn notify_error(&mut self, message: String) {
        self.notices.push_back(Notice::Error(message));
    }

    // ===== Read access =====

    pub fn list(&self) -> &EntryListModel {
        &self.list
    }

    pub fn entries(&self) -> &[Entry] {
        self.list.entries()
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.list.selected()
    }

    /// Remove is enabled iff something is selected
    pub fn remove_enabled(&self) -> bool {
        self.list.has_selection()
    }

    /// Scalar form fields as displayed
    pub fn values(&self) -> &ConfigValues {
        &self.values
    }

    /// Edit the scalar form fields
    pub fn values_mut(&mut self) -> &mut ConfigValues {
        &mut self.values
    }

    pub fn add_flow(&self) -> Option<&AddEntryFlow> {
        self.add_flow.as_ref()
    }

    pub fn add_draft_mut(&mut self) -> Option<&mut EntryDraft> {
        self.add_flow.as_mut().and_then(AddEntryFlow::draft_mut)
    }

    pub fn is_add_open(&self) -> bool {
        self.add_flow.as_ref().is_some_and(AddEntryFlow::is_open)
    }

    /// Whether any snapshot has been displayed yet
    pub fn is_loaded(&self) -> bool {
        self.applied_seq > 0
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Drain queued notices, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}
