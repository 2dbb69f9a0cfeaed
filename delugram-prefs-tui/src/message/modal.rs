//! Add window messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// Hide the window and drop the draft
    Close,
    /// Switch between the id and name fields
    NextField,
    /// Submit the draft
    Confirm,
    Input(char),
    Backspace,
}
