//! Quantity value object for cart line items

use serde::{Deserialize, Serialize};

/// How a requested line-item quantity applies to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityUpdate {
    /// Store this quantity (always >= 1)
    Set(u32),
    /// Requested quantity was zero or negative; drop the line item
    Remove,
}

impl QuantityUpdate {
    /// Classify a requested quantity. Values above `u32::MAX` saturate.
    pub fn from_requested(requested: i64) -> Self {
        if requested <= 0 {
            Self::Remove
        } else {
            Self::Set(u32::try_from(requested).unwrap_or(u32::MAX))
        }
    }

    /// Get the quantity to store, if any
    pub fn new_quantity(&self) -> Option<u32> {
        match self {
            Self::Set(qty) => Some(*qty),
            Self::Remove => None,
        }
    }
}
