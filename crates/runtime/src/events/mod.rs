//! Topic-based event bus for session events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. Publishing is best-effort: with no subscribers the
//! event is dropped.

mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::{MergeReport, Operation, SessionEvent};
