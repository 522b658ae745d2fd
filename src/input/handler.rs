use crate::input::events::MapEvent;
use crate::prelude::HashMap;
use std::collections::VecDeque;

type EventCallback = Box<dyn Fn(&MapEvent) + Send + Sync>;

/// Queued event dispatcher with Leaflet-style string event names
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event type
    listeners: HashMap<String, Vec<EventCallback>>,
    /// Event queue for processing
    event_queue: VecDeque<MapEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_type.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Emit an event to the queue
    pub fn emit(&mut self, event: MapEvent) {
        self.event_queue.push_back(event);
    }

    /// Process all queued events, invoking listeners, and return them
    /// for callers that want to react inline (e.g. the legend toggle)
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        let events: Vec<_> = self.event_queue.drain(..).collect();

        for event in &events {
            if let Some(callbacks) = self.listeners.get(event.name()) {
                for callback in callbacks {
                    callback(event);
                }
            }
        }

        events
    }

    /// Number of queued, unprocessed events
    pub fn pending(&self) -> usize {
        self.event_queue.len()
    }
}
