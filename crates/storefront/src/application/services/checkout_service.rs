//! Checkout Service - Completes a purchase for the current cart
//!
//! This is a stub: no payment, stock or order persistence is involved.
//! Checkout always succeeds and leaves the cart empty.

use shophub_domain::{Cart, CheckoutReceipt};

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutService;

impl CheckoutService {
    pub fn new() -> Self {
        Self
    }

    /// Empty `cart` and hand back the confirmation for the view to display.
    pub fn complete(&self, cart: &mut Cart) -> CheckoutReceipt {
        let receipt = cart.checkout();
        tracing::info!(
            lines = receipt.line_count,
            items = receipt.totals.item_count,
            total = %receipt.totals.price,
            "Checkout completed"
        );
        receipt
    }
}
