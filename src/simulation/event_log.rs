//! Event logging for displaying recent steering events.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A logged event for display in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Simulated time when the event occurred
    pub time: f32,
    /// Human-readable description of the event
    pub description: String,
    /// Event category, also used as a color hint
    pub kind: EventKind,
}

/// Steering event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A new destination was accepted
    Destination,
    /// The ship reached its destination and stopped
    Arrival,
    /// A wall reflected the velocity
    Bounce,
}

/// Event log that tracks recent steering events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, time: f32, description: String, kind: EventKind) {
        self.events.push_front(LoggedEvent {
            time,
            description,
            kind,
        });
        self.events.truncate(self.max_events);
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Number of events of `kind` currently held
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
