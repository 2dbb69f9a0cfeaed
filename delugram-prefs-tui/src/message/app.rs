//! Page-level messages

use super::ModalMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,

    /// Move focus to the next form field
    NextFocus,
    /// Move focus to the previous form field
    PrevFocus,

    /// Fetch a fresh snapshot
    Reload,
    /// Apply the scalar fields (the host's Apply button)
    Apply,

    /// Open the add window
    OpenAdd,
    /// Remove the selected entry
    Remove,

    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    /// Edit the focused text field
    Input(char),
    Backspace,

    /// Add window messages
    Modal(ModalMessage),

    ToggleHelp,
    ClearStatus,

    Noop,
}
