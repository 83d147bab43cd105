use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Outcome of applying one message: the ordered events it emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    events: Vec<Event>,
}

impl ExecutionResult {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl From<Vec<Event>> for ExecutionResult {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}
