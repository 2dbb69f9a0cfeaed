//! Util layer: terminal setup and logging, no page logic.

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
