//! Event logging for session auditing.
//!
//! This module defines the Event enum which captures every significant state
//! change in a sale session. Events enable:
//! - Auditing (verify the session only granted what it had)
//! - Debugging (understand what happened and in what order)
//! - Analysis (who queued, who got served, who was penalized)
//!
//! # Event Types
//!
//! - **ClientQueued / ClientDequeued**: wait-queue membership changes
//! - **OrderPlaced / OrderAmended**: locker grants
//! - **SessionClosed**: end-of-round priority penalty pass
//!
//! # Example
//!
//! ```rust
//! use locker_sale_core::Event;
//!
//! let event = Event::OrderPlaced {
//!     order_id: "a3f1...".to_string(),
//!     client: "ALICE".to_string(),
//!     quantity: 2,
//!     remaining_units: 3,
//! };
//!
//! assert_eq!(event.event_type(), "OrderPlaced");
//! assert_eq!(event.client(), Some("ALICE"));
//! ```

/// Session event capturing a state change.
///
/// Events are logged in the order they occur within the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Client admitted to the wait queue
    ClientQueued {
        client: String,
        /// Priority captured at enqueue time (the queue position key)
        priority: i32,
    },

    /// Client removed from the head of the wait queue
    ClientDequeued {
        client: String,
        /// Priority the entry was queued under
        priority: i32,
    },

    /// New order created and units granted
    OrderPlaced {
        order_id: String,
        client: String,
        quantity: u32,
        /// Units left in the pool after the grant
        remaining_units: u32,
    },

    /// Existing order topped up
    OrderAmended {
        order_id: String,
        client: String,
        added: u32,
        new_quantity: u32,
        remaining_units: u32,
    },

    /// End-of-round penalty pass over the clients still waiting
    SessionClosed {
        /// Number of waiting clients whose priority was worsened
        penalized: usize,
    },
}

impl Event {
    /// Get the event type as a string (for filtering and display)
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::ClientQueued { .. } => "ClientQueued",
            Event::ClientDequeued { .. } => "ClientDequeued",
            Event::OrderPlaced { .. } => "OrderPlaced",
            Event::OrderAmended { .. } => "OrderAmended",
            Event::SessionClosed { .. } => "SessionClosed",
        }
    }

    /// Get the client this event concerns, if any
    pub fn client(&self) -> Option<&str> {
        match self {
            Event::ClientQueued { client, .. }
            | Event::ClientDequeued { client, .. }
            | Event::OrderPlaced { client, .. }
            | Event::OrderAmended { client, .. } => Some(client),
            Event::SessionClosed { .. } => None,
        }
    }
}

/// Append-only log of session events
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of logged events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in occurrence order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events concerning a specific client
    pub fn events_for_client(&self, client: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.client() == Some(client))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
