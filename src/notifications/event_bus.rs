//! Event Bus for broadcasting events to subscribers
//!
//! Uses tokio broadcast channel for pub/sub pattern. Publishing and
//! draining are both non-blocking, so no runtime is needed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::events::{Event, EventMessage};

/// Default channel capacity
const DEFAULT_CAPACITY: usize = 1024;

/// Event bus for broadcasting events to all subscribers
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventMessage>,
    subscriber_count: Arc<AtomicUsize>,
}

impl EventBus {
    /// Create a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new event bus with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            subscriber_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: Event) {
        let message = EventMessage::new(event);
        let event_type = message.event.event_type();

        match self.sender.send(message) {
            Ok(count) => {
                debug!(event_type, subscribers = count, "Event published");
            }
            Err(_) => {
                // No subscribers - normal when no view is listening
                debug!(event_type, "Event published (no subscribers)");
            }
        }
    }

    /// Subscribe to receive events
    pub fn subscribe(&self) -> EventSubscriber {
        let receiver = self.sender.subscribe();
        let count = self.subscriber_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(total = count, "New event subscriber");

        EventSubscriber {
            receiver,
            subscriber_count: self.subscriber_count.clone(),
        }
    }

    /// Get current subscriber count
    pub fn subscriber_count(&self) -> usize {
        self.subscriber_count.load(Ordering::SeqCst)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscriber handle; decrements the count when dropped
pub struct EventSubscriber {
    receiver: broadcast::Receiver<EventMessage>,
    subscriber_count: Arc<AtomicUsize>,
}

impl EventSubscriber {
    /// Next pending event, if any
    pub fn try_recv(&mut self) -> Option<EventMessage> {
        loop {
            match self.receiver.try_recv() {
                Ok(message) => return Some(message),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event subscriber lagged, skipping missed events");
                }
                Err(_) => return None,
            }
        }
    }

    /// Everything published since the last drain
    pub fn drain(&mut self) -> Vec<EventMessage> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

impl Drop for EventSubscriber {
    fn drop(&mut self) {
        let count = self.subscriber_count.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!(remaining = count, "Event subscriber dropped");
    }
}

/// Shared event bus type
pub type SharedEventBus = Arc<EventBus>;

/// Create a new shared event bus
pub fn create_event_bus(capacity: usize) -> SharedEventBus {
    Arc::new(EventBus::with_capacity(capacity))
}
