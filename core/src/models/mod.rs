//! Domain models for the locker sale session

pub mod client;
pub mod event;
pub mod order;

// Re-exports
pub use client::{Client, ClientError};
pub use event::{Event, EventLog};
pub use order::{Order, OrderError, MAX_UNITS_PER_CLIENT};
