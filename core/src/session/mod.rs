//! Sale session engine
//!
//! A `Session` sells a fixed pool of identical lockers during one round. It
//! owns every collection involved:
//! - The client registry (the stable identities whose priorities the session
//!   mutates over time)
//! - The remaining locker count
//! - The priority wait queue of clients not yet served
//! - The per-client order map and the creation-ordered order log
//! - The event log
//!
//! # Operation outcomes
//!
//! Malformed input (empty name, zero quantity, zero capacity) and history
//! violations (ordering twice, amending with no order) raise `SessionError`.
//! Every other rejection (per-client cap reached, not enough lockers left,
//! already queued) is an ordinary `Ok(false)`: callers branch, they do not
//! catch.
//!
//! # Critical Invariants
//!
//! 1. `remaining_units` never goes negative: grants are all-or-nothing and
//!    decrement by exactly the granted quantity
//! 2. A client appears in the wait queue at most once at any time
//! 3. A client holds at most one order for the lifetime of the session
//! 4. No order quantity ever exceeds `MAX_UNITS_PER_CLIENT`

mod queue;

pub use queue::WaitQueue;

use crate::models::client::{Client, ClientError};
use crate::models::event::{Event, EventLog};
use crate::models::order::{Order, OrderError, MAX_UNITS_PER_CLIENT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during session operations
///
/// `EmptyClientName`, `NonPositiveQuantity` and `NonPositiveCapacity` are
/// invalid-argument failures; `DuplicateOrder` and `NoExistingOrder` are
/// invalid-state failures against the session's history.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Client name must be non-empty")]
    EmptyClientName,

    #[error("Quantity must be positive")]
    NonPositiveQuantity,

    #[error("Initial unit count must be positive")]
    NonPositiveCapacity,

    #[error("Client {client} already has an order in this session")]
    DuplicateOrder { client: String },

    #[error("Client {client} has no order in this session")]
    NoExistingOrder { client: String },

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

/// Serializable point-in-time snapshot of a session (for display/export)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub remaining_units: u32,
    pub waiting_clients: usize,
    /// Orders in creation order, with their current (possibly amended) quantities
    pub orders: Vec<Order>,
    pub close_count: u32,
}

/// One locker sale session
///
/// # Example
///
/// ```rust
/// use locker_sale_core::{Client, Session};
///
/// let mut session = Session::new(5).unwrap();
/// let alice = Client::new("ALICE".to_string()).unwrap();
///
/// assert!(session.place_order(&alice, 3).unwrap());
/// assert_eq!(session.remaining_units(), 2);
///
/// // Served clients come back with a better standing
/// assert_eq!(session.get_client("ALICE").unwrap().priority(), -1);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    /// All clients the session has seen, indexed by name
    ///
    /// This is the authoritative copy: priority boosts and penalties land
    /// here, and `dequeue_next` hands out clones of these entries.
    clients: HashMap<String, Client>,

    /// Lockers still available for sale; monotonically decreasing
    remaining_units: u32,

    /// Clients waiting to be invited to order
    wait_queue: WaitQueue,

    /// At most one order per client, indexed by client name
    orders_by_client: HashMap<String, Order>,

    /// Client names in order-creation order (append-only; amendments do not
    /// append). Each name resolves through `orders_by_client`, so the log
    /// always reflects current quantities.
    order_log: Vec<String>,

    events: EventLog,

    /// Number of times `close_session` has run. Closing does not freeze the
    /// session; this counter lets callers layer their own round protocol.
    close_count: u32,
}

impl Session {
    /// Start a sale session with `initial_units` lockers on offer
    ///
    /// # Errors
    /// Returns `SessionError::NonPositiveCapacity` if `initial_units` is zero.
    pub fn new(initial_units: u32) -> Result<Self, SessionError> {
        if initial_units == 0 {
            return Err(SessionError::NonPositiveCapacity);
        }
        Ok(Self {
            clients: HashMap::new(),
            remaining_units: initial_units,
            wait_queue: WaitQueue::new(),
            orders_by_client: HashMap::new(),
            order_log: Vec::new(),
            events: EventLog::new(),
            close_count: 0,
        })
    }

    /// Admit a client to the wait queue, if possible
    ///
    /// Policy, evaluated in order:
    /// 1. Client already holds an order at the per-client cap → false
    ///    (queueing them again would be pointless)
    /// 2. No lockers left to sell → false
    /// 3. Client already waiting → false (idempotent no-op)
    /// 4. Otherwise queue the client under their current priority → true
    ///
    /// Rejections have no side effects; admission only touches queue
    /// membership, never orders or the remaining count.
    ///
    /// # Errors
    /// Returns `SessionError::EmptyClientName` on an empty name.
    pub fn enqueue(&mut self, client: &Client) -> Result<bool, SessionError> {
        if client.name().is_empty() {
            return Err(SessionError::EmptyClientName);
        }
        if let Some(order) = self.orders_by_client.get(client.name()) {
            if order.quantity() >= MAX_UNITS_PER_CLIENT {
                return Ok(false);
            }
        }
        if self.remaining_units == 0 {
            return Ok(false);
        }
        if self.wait_queue.contains(client.name()) {
            return Ok(false);
        }

        // Queue under the registered priority; a client already known to the
        // session keeps the standing it earned here, whatever the caller's
        // copy says.
        let priority = self
            .clients
            .entry(client.name().to_string())
            .or_insert_with(|| client.clone())
            .priority();
        self.wait_queue.push(client.name(), priority);
        self.events.log(Event::ClientQueued {
            client: client.name().to_string(),
            priority,
        });
        Ok(true)
    }

    /// Remove and return the best-priority waiting client
    ///
    /// Lower priority value wins; equal priorities are served first-in
    /// first-out. Returns None if nobody is waiting. What to do with the
    /// client, typically invite them to order, is the caller's decision.
    pub fn dequeue_next(&mut self) -> Option<Client> {
        let (name, queued_priority) = self.wait_queue.pop()?;
        self.events.log(Event::ClientDequeued {
            client: name.clone(),
            priority: queued_priority,
        });
        self.clients.get(&name).cloned()
    }

    /// Create a new order for `quantity` lockers, if possible
    ///
    /// Orders are all-or-nothing: either the full quantity is granted or
    /// nothing changes.
    /// - `quantity` above `MAX_UNITS_PER_CLIENT` → false
    /// - Fewer than `quantity` lockers remaining → false
    /// - Otherwise the order is created, logged, the pool is decremented by
    ///   exactly `quantity`, and the client's priority improves by one step
    ///
    /// # Errors
    /// - `SessionError::EmptyClientName` / `NonPositiveQuantity` on bad input
    /// - `SessionError::DuplicateOrder` if the client already ordered this
    ///   session (amendments go through [`Session::amend_order`])
    pub fn place_order(&mut self, client: &Client, quantity: u32) -> Result<bool, SessionError> {
        if client.name().is_empty() {
            return Err(SessionError::EmptyClientName);
        }
        if quantity == 0 {
            return Err(SessionError::NonPositiveQuantity);
        }
        if self.orders_by_client.contains_key(client.name()) {
            return Err(SessionError::DuplicateOrder {
                client: client.name().to_string(),
            });
        }
        if quantity > MAX_UNITS_PER_CLIENT {
            return Ok(false);
        }
        if self.remaining_units < quantity {
            return Ok(false);
        }

        let order = Order::new(client.name().to_string(), quantity)?;
        self.events.log(Event::OrderPlaced {
            order_id: order.id().to_string(),
            client: client.name().to_string(),
            quantity,
            remaining_units: self.remaining_units - quantity,
        });
        self.order_log.push(client.name().to_string());
        self.orders_by_client
            .insert(client.name().to_string(), order);
        self.remaining_units -= quantity;
        self.clients
            .entry(client.name().to_string())
            .or_insert_with(|| client.clone())
            .boost_priority();
        Ok(true)
    }

    /// Top up the client's existing order by `extra` lockers, if possible
    ///
    /// Same all-or-nothing rule as [`Session::place_order`]:
    /// - New total above `MAX_UNITS_PER_CLIENT` → false
    /// - Fewer than `extra` lockers remaining → false
    /// - Otherwise the order is mutated in place (never duplicated) and the
    ///   pool is decremented by exactly `extra`
    ///
    /// Amending does not change the client's priority.
    ///
    /// # Errors
    /// - `SessionError::EmptyClientName` / `NonPositiveQuantity` on bad input
    /// - `SessionError::NoExistingOrder` if the client has not ordered yet
    pub fn amend_order(&mut self, client: &Client, extra: u32) -> Result<bool, SessionError> {
        if client.name().is_empty() {
            return Err(SessionError::EmptyClientName);
        }
        if extra == 0 {
            return Err(SessionError::NonPositiveQuantity);
        }
        let order = self.orders_by_client.get_mut(client.name()).ok_or_else(|| {
            SessionError::NoExistingOrder {
                client: client.name().to_string(),
            }
        })?;

        let total_in_bounds = order
            .quantity()
            .checked_add(extra)
            .is_some_and(|total| total <= MAX_UNITS_PER_CLIENT);
        if !total_in_bounds {
            return Ok(false);
        }
        if self.remaining_units < extra {
            return Ok(false);
        }

        order.increase_quantity(extra)?;
        let order_id = order.id().to_string();
        let new_quantity = order.quantity();
        self.remaining_units -= extra;
        self.events.log(Event::OrderAmended {
            order_id,
            client: client.name().to_string(),
            added: extra,
            new_quantity,
            remaining_units: self.remaining_units,
        });
        Ok(true)
    }

    /// Close the sale round: penalize everyone still waiting
    ///
    /// Every client present in the wait queue has its priority worsened by
    /// one step. Clients served earlier were already boosted at order time
    /// and are untouched here. The queue and the orders are left as they
    /// are, and the session stays fully operable afterwards; callers wanting
    /// a hard stop can watch [`Session::close_count`].
    pub fn close_session(&mut self) {
        let mut penalized = 0;
        for name in self.wait_queue.member_names() {
            if let Some(client) = self.clients.get_mut(name) {
                client.penalize_priority();
                penalized += 1;
            }
        }
        self.close_count += 1;
        self.events.log(Event::SessionClosed { penalized });
    }

    /// Lockers still available for sale
    pub fn remaining_units(&self) -> u32 {
        self.remaining_units
    }

    /// Number of clients currently waiting
    pub fn queue_len(&self) -> usize {
        self.wait_queue.len()
    }

    /// Check whether a client is currently in the wait queue
    pub fn is_queued(&self, name: &str) -> bool {
        self.wait_queue.contains(name)
    }

    /// Get the session's view of a client (current priority included)
    pub fn get_client(&self, name: &str) -> Option<&Client> {
        self.clients.get(name)
    }

    /// Get a client's order, if they placed one
    pub fn order_for(&self, name: &str) -> Option<&Order> {
        self.orders_by_client.get(name)
    }

    /// All orders in creation order, with current quantities
    pub fn orders(&self) -> Vec<&Order> {
        self.order_log
            .iter()
            .filter_map(|name| self.orders_by_client.get(name))
            .collect()
    }

    /// Number of orders created this session
    pub fn num_orders(&self) -> usize {
        self.order_log.len()
    }

    /// Audit log of everything that happened this session
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// How many times the session has been closed
    pub fn close_count(&self) -> u32 {
        self.close_count
    }

    /// Serializable snapshot of the session's current state
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            remaining_units: self.remaining_units,
            waiting_clients: self.wait_queue.len(),
            orders: self.orders().into_iter().cloned().collect(),
            close_count: self.close_count,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "remaining lockers: {}, waiting clients: {}, orders: {}",
            self.remaining_units,
            self.wait_queue.len(),
            self.order_log.len()
        )
    }
}
