//! Event bus for the inbound message stream.
//!
//! Push-based: subscribers register callbacks invoked for every event the
//! bridge dispatches. Events are delivered one at a time, in arrival order,
//! from the single bridge task.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ports::outbound::ClientEvent;

/// Event bus carrying [`ClientEvent`]s from the bridge to the application.
#[derive(Clone)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Box<dyn FnMut(ClientEvent) + Send + 'static>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Subscribe to all events.
    pub async fn subscribe(&self, callback: impl FnMut(ClientEvent) + Send + 'static) {
        self.subscribers.lock().await.push(Box::new(callback));
    }

    /// Dispatch an event to all subscribers, in registration order.
    pub async fn dispatch(&self, event: ClientEvent) {
        let mut subscribers = self.subscribers.lock().await;
        for subscriber in subscribers.iter_mut() {
            subscriber(event.clone());
        }
    }

    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.lock().await.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
