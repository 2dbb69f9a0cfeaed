//! Event layer
//!
//! Translates terminal input into messages. Which translation applies depends
//! on what is on top: the help overlay, the add window, or the page with its
//! focused field.

mod handler;
mod keymap;

pub use handler::handle_event;
