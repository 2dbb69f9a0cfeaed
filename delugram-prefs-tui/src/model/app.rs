//! Application state

use std::sync::Arc;

use delugram_prefs_app::PrefsApp;
use delugram_prefs_core::services::{AllowListController, Notice};
use delugram_prefs_core::types::EntryKind;

use super::{AddField, Focus};
use crate::host::TuiHost;

/// Kind of text in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A call is running; cleared once nothing is in flight
    Progress,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub kind: StatusKind,
}

pub struct App<K: EntryKind> {
    pub should_quit: bool,

    pub focus: Focus,

    /// Field of the add window receiving input
    pub add_field: AddField,

    pub show_help: bool,

    pub status: Option<StatusLine>,

    /// Page and host registration
    pub prefs: PrefsApp<K>,

    pub host: Arc<TuiHost>,
}

impl<K: EntryKind> App<K> {
    pub fn new(prefs: PrefsApp<K>, host: Arc<TuiHost>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            add_field: AddField::default(),
            show_help: false,
            status: None,
            prefs,
            host,
        }
    }

    pub fn controller(&self) -> &AllowListController<K> {
        self.prefs.page.controller()
    }

    pub fn is_add_open(&self) -> bool {
        self.controller().is_add_open()
    }

    pub fn set_progress(&mut self, message: impl Into<String>) {
        self.set(message, StatusKind::Progress);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.set(message, StatusKind::Info);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.set(message, StatusKind::Error);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn set(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusLine {
            message: message.into(),
            kind,
        });
    }

    /// Move controller notices into the status line.
    ///
    /// The newest error wins over informational notices.
    pub fn drain_notices(&mut self) {
        let notices = self.prefs.page.controller_mut().take_notices();
        let shown = notices
            .iter()
            .rev()
            .find(|n| n.is_error())
            .or_else(|| notices.last());

        match shown {
            Some(Notice::Error(msg)) => self.set_error(msg.clone()),
            Some(Notice::Info(msg)) => self.set_status(msg.clone()),
            None => {
                let idle = self.prefs.page.in_flight() == 0;
                if idle && matches!(&self.status, Some(s) if s.kind == StatusKind::Progress) {
                    self.clear_status();
                }
            }
        }
    }
}
