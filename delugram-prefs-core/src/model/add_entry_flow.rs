//! Modal add-entry interaction
//!
//! ```text
//! Closed ──open()──▶ Open ──cancel()──▶ Closed
//!                     │
//!                     └──submit()──▶ Closed (+1 pending add)
//!                                      │
//!                          complete(Ok) ─▶ completion notification
//!                          complete(Err) ─▶ nothing
//! ```
//!
//! The window hides as soon as the draft is submitted; the RPC outcome arrives later.

use crate::error::{PrefsError, PrefsResult};
use crate::types::Entry;

/// Fields typed into the add window.
///
/// Empty strings are allowed and forwarded unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub id: String,
    pub name: String,
}

impl EntryDraft {
    fn into_entry(self) -> Entry {
        Entry {
            id: self.id,
            name: self.name,
        }
    }
}

/// Visibility of the add window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum AddFlowState {
    #[default]
    Closed,
    Open(EntryDraft),
}

/// The add window. A controller owns at most one and reuses it.
#[derive(Debug, Default)]
pub struct AddEntryFlow {
    state: AddFlowState,
    /// Submitted adds whose RPC has not answered yet
    pending: usize,
}

impl AddEntryFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, AddFlowState::Open(_))
    }

    /// Show the window.
    ///
    /// A closed window opens with an empty draft; an open one is left as it is.
    /// Returns `true` when the window was closed before.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = AddFlowState::Open(EntryDraft::default());
        true
    }

    /// Hide the window and discard the draft. No RPC.
    pub fn cancel(&mut self) {
        self.state = AddFlowState::Closed;
    }

    pub fn draft(&self) -> Option<&EntryDraft> {
        match &self.state {
            AddFlowState::Open(draft) => Some(draft),
            AddFlowState::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EntryDraft> {
        match &mut self.state {
            AddFlowState::Open(draft) => Some(draft),
            AddFlowState::Closed => None,
        }
    }

    /// Take the draft, hide the window, and return the entry to send.
    pub fn submit(&mut self) -> PrefsResult<Entry> {
        match std::mem::take(&mut self.state) {
            AddFlowState::Open(draft) => {
                self.pending += 1;
                Ok(draft.into_entry())
            }
            AddFlowState::Closed => Err(PrefsError::AddWindowClosed),
        }
    }

    /// Record the outcome of a submitted add.
    ///
    /// Returns `true` when the completion notification fires, which happens
    /// only for a successful call.
    pub fn complete<T>(&mut self, result: &PrefsResult<T>) -> bool {
        self.pending = self.pending.saturating_sub(1);
        result.is_ok()
    }

    /// Adds submitted but not yet answered
    pub fn pending(&self) -> usize {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_resets_draft_only_when_closed() {
        let mut flow = AddEntryFlow::new();
        assert!(flow.open());
        flow.draft_mut().unwrap().id = "7".into();

        assert!(!flow.open());
        assert_eq!(flow.draft().unwrap().id, "7");

        flow.cancel();
        assert!(flow.open());
        assert_eq!(flow.draft(), Some(&EntryDraft::default()));
    }

    #[test]
    fn submit_hides_window_and_counts_pending() {
        let mut flow = AddEntryFlow::new();
        flow.open();
        let draft = flow.draft_mut().unwrap();
        draft.id = "2".into();
        draft.name = "Bob".into();

        let entry = flow.submit().unwrap();

        assert_eq!(entry, Entry::new("2", "Bob"));
        assert!(!flow.is_open());
        assert_eq!(flow.pending(), 1);
    }

    #[test]
    fn empty_fields_are_forwarded() {
        let mut flow = AddEntryFlow::new();
        flow.open();
        assert_eq!(flow.submit().unwrap(), Entry::new("", ""));
    }

    #[test]
    fn submit_while_closed_is_rejected() {
        let mut flow = AddEntryFlow::new();
        assert_eq!(flow.submit(), Err(PrefsError::AddWindowClosed));
        assert_eq!(flow.pending(), 0);
    }

    #[test]
    fn completion_fires_only_on_success() {
        let mut flow = AddEntryFlow::new();
        flow.open();
        flow.submit().unwrap();
        flow.open();
        flow.submit().unwrap();

        assert!(!flow.complete::<bool>(&Err(PrefsError::Network("down".into()))));
        assert!(flow.complete(&Ok(true)));
        assert_eq!(flow.pending(), 0);
    }
}
