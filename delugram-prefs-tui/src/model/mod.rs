//! Model layer
//!
//! `App` wraps the preferences app (page + host registration) together with
//! what only the terminal needs: focus, the status line and the help overlay.
//! Page state itself lives in the controller and is never copied here.

mod app;
mod focus;

pub use app::{App, StatusKind};
pub use focus::{AddField, Focus};
