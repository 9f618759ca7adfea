//! Client model
//!
//! Represents a client taking part in a locker sale session.
//! Each client has:
//! - A non-empty name, which is the client's identity (equality and hashing
//!   use the name only)
//! - A mutable integer priority governing wait-queue ordering
//!
//! # Priority direction
//!
//! Lower numeric priority is served first. A successful order *boosts* the
//! client (priority − 1, better future position); remaining in the wait queue
//! when a session closes *penalizes* the client (priority + 1). Priorities may
//! go below zero: a freshly boosted default client sits at −1.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors that can occur when constructing a client
#[derive(Debug, Error, PartialEq)]
pub enum ClientError {
    #[error("Client name must be non-empty")]
    EmptyName,
}

/// A client identified by name, carrying a mutable queue priority
///
/// # Example
/// ```
/// use locker_sale_core::Client;
///
/// let mut client = Client::new("ALICE".to_string()).unwrap();
/// assert_eq!(client.name(), "ALICE");
/// assert_eq!(client.priority(), 0);
///
/// client.boost_priority();
/// assert_eq!(client.priority(), -1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Identity key; never empty
    name: String,

    /// Wait-queue ordering key; lower value dequeues earlier
    priority: i32,
}

impl Client {
    /// Create a new client with the default priority (0)
    ///
    /// # Errors
    /// Returns `ClientError::EmptyName` if `name` is empty.
    pub fn new(name: String) -> Result<Self, ClientError> {
        Self::with_priority(name, 0)
    }

    /// Create a new client with an explicit starting priority
    ///
    /// Useful when carrying standing over from a previous session.
    ///
    /// # Example
    /// ```
    /// use locker_sale_core::Client;
    ///
    /// let client = Client::with_priority("BOB".to_string(), 2).unwrap();
    /// assert_eq!(client.priority(), 2);
    /// ```
    pub fn with_priority(name: String, priority: i32) -> Result<Self, ClientError> {
        if name.is_empty() {
            return Err(ClientError::EmptyName);
        }
        Ok(Self { name, priority })
    }

    /// Get the client's name (identity key)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current priority (lower = served earlier)
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Set the priority directly
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// Improve the client's standing by one step (priority − 1)
    ///
    /// Applied after a successful order: the client has been served once but
    /// may re-queue in a later round with a better position.
    pub fn boost_priority(&mut self) {
        self.priority -= 1;
    }

    /// Worsen the client's standing by one step (priority + 1)
    ///
    /// Applied at session close to every client still waiting.
    pub fn penalize_priority(&mut self) {
        self.priority += 1;
    }
}

// Identity is the name alone; priority changes over time and must not
// affect map/set membership.
impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Client {}

impl Hash for Client {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
