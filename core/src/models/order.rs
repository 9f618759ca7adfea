//! Order model
//!
//! Represents a client's single commitment to a quantity of lockers within
//! one sale session. Each order has:
//! - A unique identifier (UUID)
//! - The owning client's name
//! - A quantity in `1..=MAX_UNITS_PER_CLIENT`
//!
//! A client holds at most one order per session; amendments mutate the
//! existing order in place and never create a second one. Orders are
//! all-or-nothing: there is no partial grant or truncation anywhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of lockers a single client may hold in one session
pub const MAX_UNITS_PER_CLIENT: u32 = 3;

/// Errors that can occur during order operations
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("Order quantity must be positive")]
    NonPositiveQuantity,

    #[error("Order quantity {quantity} exceeds the per-client cap of {max}")]
    ExceedsCap { quantity: u32, max: u32 },
}

/// A client's single locker order within a session
///
/// # Example
/// ```
/// use locker_sale_core::Order;
///
/// let mut order = Order::new("ALICE".to_string(), 2).unwrap();
/// assert_eq!(order.quantity(), 2);
///
/// order.increase_quantity(1).unwrap();
/// assert_eq!(order.quantity(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier (UUID)
    id: String,

    /// Name of the client the order belongs to
    client_name: String,

    /// Current granted quantity, always `1..=MAX_UNITS_PER_CLIENT`
    quantity: u32,
}

impl Order {
    /// Create a new order
    ///
    /// # Errors
    /// - `OrderError::NonPositiveQuantity` if `quantity` is zero
    /// - `OrderError::ExceedsCap` if `quantity` exceeds `MAX_UNITS_PER_CLIENT`
    pub fn new(client_name: String, quantity: u32) -> Result<Self, OrderError> {
        if quantity == 0 {
            return Err(OrderError::NonPositiveQuantity);
        }
        if quantity > MAX_UNITS_PER_CLIENT {
            return Err(OrderError::ExceedsCap {
                quantity,
                max: MAX_UNITS_PER_CLIENT,
            });
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            client_name,
            quantity,
        })
    }

    /// Get the order ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the owning client's name
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Get the current granted quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Raise the granted quantity by `extra` units (amendment)
    ///
    /// The new total must stay within `MAX_UNITS_PER_CLIENT`. Callers check
    /// locker availability before calling; this guard only enforces the
    /// per-order bounds.
    ///
    /// # Errors
    /// - `OrderError::NonPositiveQuantity` if `extra` is zero
    /// - `OrderError::ExceedsCap` if the new total would exceed the cap
    pub fn increase_quantity(&mut self, extra: u32) -> Result<(), OrderError> {
        if extra == 0 {
            return Err(OrderError::NonPositiveQuantity);
        }
        let total = match self.quantity.checked_add(extra) {
            Some(total) if total <= MAX_UNITS_PER_CLIENT => total,
            // Overflowing u32 is as far over the cap as it gets
            _ => {
                return Err(OrderError::ExceedsCap {
                    quantity: self.quantity.saturating_add(extra),
                    max: MAX_UNITS_PER_CLIENT,
                })
            }
        };
        self.quantity = total;
        Ok(())
    }
}
