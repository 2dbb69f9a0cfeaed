//! Displayed entry list and its selection

use crate::types::Entry;

/// Ordered read-through copy of the server's entry list plus the current selection.
///
/// The selection is an index into the current sequence. It never survives
/// [`replace_all`](Self::replace_all).
#[derive(Debug, Default, Clone)]
pub struct EntryListModel {
    entries: Vec<Entry>,
    selected: Option<usize>,
}

impl EntryListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in server order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole sequence and clear the selection
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.selected = None;
    }

    /// Set or clear the selection.
    ///
    /// An index outside the current sequence clears it. Returns whether an
    /// entry is selected afterwards.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        self.selected = index.filter(|&i| i < self.entries.len());
        self.selected.is_some()
    }

    /// Select the previous entry (the first one when nothing is selected)
    pub fn select_previous(&mut self) -> bool {
        let index = match self.selected {
            Some(i) => Some(i.saturating_sub(1)),
            None if self.entries.is_empty() => None,
            None => Some(0),
        };
        self.select(index)
    }

    /// Select the next entry (the first one when nothing is selected)
    pub fn select_next(&mut self) -> bool {
        let index = match self.selected {
            Some(i) if i + 1 < self.entries.len() => Some(i + 1),
            Some(i) => Some(i),
            None if self.entries.is_empty() => None,
            None => Some(0),
        };
        self.select(index)
    }

    /// Index of the selected entry
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected entry
    pub fn selected(&self) -> Option<&Entry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(ids: &[&str]) -> EntryListModel {
        let mut model = EntryListModel::new();
        model.replace_all(ids.iter().map(|id| Entry::new(*id, format!("name-{id}"))).collect());
        model
    }

    #[test]
    fn replace_all_clears_selection_even_if_id_survives() {
        let mut model = model_with(&["1", "2"]);
        assert!(model.select(Some(0)));

        model.replace_all(vec![Entry::new("1", "Alice")]);

        assert!(!model.has_selection());
        assert_eq!(model.entries(), &[Entry::new("1", "Alice")]);
    }

    #[test]
    fn out_of_range_selection_clears() {
        let mut model = model_with(&["1"]);
        assert!(model.select(Some(0)));
        assert!(!model.select(Some(5)));
        assert!(model.selected().is_none());
    }

    #[test]
    fn next_and_previous_clamp_to_bounds() {
        let mut model = model_with(&["a", "b", "c"]);

        assert!(model.select_next());
        assert_eq!(model.selected_index(), Some(0));
        model.select_next();
        model.select_next();
        model.select_next();
        assert_eq!(model.selected().map(|e| e.id.as_str()), Some("c"));

        model.select_previous();
        model.select_previous();
        model.select_previous();
        assert_eq!(model.selected_index(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_selects_nothing() {
        let mut model = EntryListModel::new();
        assert!(!model.select_next());
        assert!(!model.select_previous());
    }
}
