//! Cart-related domain events
//!
//! These enums communicate what happened when cart state was modified,
//! allowing callers to react appropriately. None of them is an error.

use serde::{Deserialize, Serialize};

use crate::value_objects::Money;
use crate::ProductId;

/// Outcome of a cart mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "type")]
pub enum CartChange {
    /// A new line item was appended with quantity 1
    Added { product_id: ProductId },
    /// An existing line item's quantity went up by one
    Incremented { product_id: ProductId, quantity: u32 },
    /// A line item's quantity was set explicitly
    QuantityChanged {
        product_id: ProductId,
        from: u32,
        to: u32,
    },
    /// A line item was dropped from the cart
    Removed { product_id: ProductId },
    /// Nothing matched; the cart is exactly as it was
    Unchanged,
}

impl CartChange {
    /// Whether the cart contents differ after this mutation
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// The product this change touched, if any
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::Added { product_id }
            | Self::Incremented { product_id, .. }
            | Self::QuantityChanged { product_id, .. }
            | Self::Removed { product_id } => Some(*product_id),
            Self::Unchanged => None,
        }
    }
}

/// Aggregate figures derived from the current line items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of all line-item quantities
    pub item_count: u64,
    /// Sum of price x quantity over all line items
    pub price: Money,
}

/// Confirmation message shown after every checkout
pub const CHECKOUT_CONFIRMATION: &str = "Thank you for your purchase! This is a demo application.";

/// Result of checking out. Checkout cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    /// Totals of the cart at the moment it was emptied
    pub totals: CartTotals,
    /// Number of distinct line items that were checked out
    pub line_count: usize,
    pub message: String,
}

impl CheckoutReceipt {
    pub fn new(totals: CartTotals, line_count: usize) -> Self {
        Self {
            totals,
            line_count,
            message: CHECKOUT_CONFIRMATION.to_string(),
        }
    }

    /// Checkout always succeeds
    pub fn is_success(&self) -> bool {
        true
    }
}
