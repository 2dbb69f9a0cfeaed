//! Page state models
//!
//! Pure data containers mutated only by `AllowListController`.

mod add_entry_flow;
mod entry_list;

pub use add_entry_flow::{AddEntryFlow, EntryDraft};
pub use entry_list::EntryListModel;
