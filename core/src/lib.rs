//! Locker Sale Core - Allocation Session Engine
//!
//! Sells a fixed pool of identical lockers to clients during one session,
//! with a priority-ordered wait queue and per-client orders capped at a
//! maximum quantity.
//!
//! # Architecture
//!
//! - **models**: Domain types (Client, Order, Event)
//! - **session**: The session aggregate and its wait queue
//!
//! # Critical Invariants
//!
//! 1. The remaining locker count never goes negative: every grant is
//!    all-or-nothing and decrements by exactly the granted quantity
//! 2. A client waits at most once and orders at most once per session
//! 3. No order ever exceeds `MAX_UNITS_PER_CLIENT` lockers
//!
//! # Priority direction
//!
//! Lower numeric priority is served first. Being served boosts a client by
//! one step (−1); still waiting when the session closes penalizes by one
//! step (+1).

// Module declarations
pub mod models;
pub mod session;

// Re-exports for convenience
pub use models::{
    client::{Client, ClientError},
    event::{Event, EventLog},
    order::{Order, OrderError, MAX_UNITS_PER_CLIENT},
};
pub use session::{Session, SessionError, SessionSummary, WaitQueue};
