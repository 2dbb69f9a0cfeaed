//! Message layer
//!
//! ```text
//!   Event ──translate──▶ Message ──consume──▶ Update ──mutate──▶ Model
//!     ▲                                                            │
//!     └──────────────────────── View ◀────────── read ─────────────┘
//! ```
//!
//! Every operator action reaches the model as a message. `AppMessage` covers
//! the page itself, `ModalMessage` the add window.

mod app;
mod modal;

pub use app::AppMessage;
pub use modal::ModalMessage;
