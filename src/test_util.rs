//! Helpers shared by the unit tests.

use std::sync::{Arc, Mutex};
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, prelude::*, Layer};

/// Records the level of every event emitted by this crate.
#[derive(Clone, Default)]
pub struct CapturedEvents(Arc<Mutex<Vec<Level>>>);

impl CapturedEvents {
    /// Capture events on the current thread until the guard is dropped.
    pub fn install() -> (Self, DefaultGuard) {
        let events = Self::default();
        let subscriber = tracing_subscriber::registry().with(events.clone());
        (events, tracing::subscriber::set_default(subscriber))
    }

    pub fn levels(&self) -> Vec<Level> {
        self.0.lock().map(|levels| levels.clone()).unwrap_or_default()
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(env!("CARGO_CRATE_NAME")) {
            return;
        }
        if let Ok(mut levels) = self.0.lock() {
            levels.push(*event.metadata().level());
        }
    }
}
