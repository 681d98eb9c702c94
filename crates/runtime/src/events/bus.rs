//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::SessionEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Collection replacement and optimistic rollbacks
    Collection,
    /// Snapshot merges
    Snapshots,
    /// View state corrections (page clamps)
    View,
}

/// Topic-based event bus
///
/// Cloning shares the underlying channels.
#[derive(Clone)]
pub struct EventBus {
    collection: broadcast::Sender<SessionEvent>,
    snapshots: broadcast::Sender<SessionEvent>,
    view: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            collection: broadcast::channel(capacity).0,
            snapshots: broadcast::channel(capacity).0,
            view: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<SessionEvent> {
        match topic {
            Topic::Collection => &self.collection,
            Topic::Snapshots => &self.snapshots,
            Topic::View => &self.view,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: SessionEvent) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<SessionEvent> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::new();
        let mut collection = bus.subscribe(Topic::Collection);
        let mut view = bus.subscribe(Topic::View);

        bus.publish(SessionEvent::CollectionReplaced { records: 3 });

        assert_eq!(
            collection.recv().await.ok(),
            Some(SessionEvent::CollectionReplaced { records: 3 })
        );
        assert!(view.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::with_capacity(0);
        bus.publish(SessionEvent::PageClamped {
            requested: 4,
            clamped: 2,
        });
    }
}
