//! Main loop
//!
//! ```text
//! loop {
//!     draw
//!     select {
//!         next RPC response  → apply to the page, surface notices
//!         next terminal event → handle_event → update
//!     }
//! }
//! ```
//!
//! Both arms run on this task, so the page has a single writer. The response
//! arm is only armed while something is in flight.

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;

use delugram_prefs_core::types::EntryKind;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

pub async fn run<K: EntryKind>(terminal: &mut Term, app: &mut App<K>) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        let in_flight = app.prefs.page.in_flight() > 0;
        tokio::select! {
            applied = app.prefs.page.next_outcome(), if in_flight => {
                if applied {
                    app.drain_notices();
                }
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let msg = event::handle_event(&event, app);
                        update::update(app, msg);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }
    }

    Ok(())
}
