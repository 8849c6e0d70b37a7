//! Cart aggregate - The shopper's in-session basket
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: line items are only reachable through the methods below
//! - **Total mutations**: every operation accepts any input and never fails;
//!   operations on absent products return `CartChange::Unchanged`
//! - **Events from mutations**: each mutation returns a `CartChange`
//! - **No caching**: `totals()` is recomputed from the line items on every call

use serde::{Deserialize, Serialize};

use crate::entities::Product;
use crate::events::{CartChange, CartTotals, CheckoutReceipt};
use crate::value_objects::{Money, QuantityUpdate};
use shophub_domain::ProductId;

/// A product in the cart together with how many of it the shopper wants
///
/// # Invariants
///
/// - `quantity >= 1`; a line item that would drop below that is removed instead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    product: Product,
    quantity: u32,
}

impl CartLineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price x quantity for this line
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// The shopping cart
///
/// # Invariants
///
/// - At most one line item per product id
/// - Every line item has `quantity >= 1`
/// - Line items keep insertion order
///
/// # Example
///
/// ```
/// use shophub_domain::{Cart, Money, Product, ProductId, ProductName};
///
/// let lamp = Product::new(
///     ProductId::new(8),
///     ProductName::new("Desk Lamp").unwrap(),
///     Money::from_cents(3499),
/// );
///
/// let mut cart = Cart::new();
/// cart.add_item(&lamp);
/// cart.add_item(&lamp);
///
/// assert_eq!(cart.totals().item_count, 2);
/// assert_eq!(cart.totals().price.to_string(), "$69.98");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Line items in insertion order
    #[inline]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.product_id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct line items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity and price, recomputed from the current line items.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self
                .items
                .iter()
                .map(|item| u64::from(item.quantity))
                .sum(),
            price: self.items.iter().map(CartLineItem::subtotal).sum(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `product`.
    ///
    /// Increments the existing line item for the same id, leaving its stored
    /// product untouched, or appends a new line item with quantity 1.
    pub fn add_item(&mut self, product: &Product) -> CartChange {
        if let Some(existing) = self.find_mut(product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return CartChange::Incremented {
                product_id: product.id,
                quantity: existing.quantity,
            };
        }

        self.items.push(CartLineItem::new(product.clone()));
        CartChange::Added {
            product_id: product.id,
        }
    }

    /// Drop the line item for `product_id`. Absent ids are a silent no-op.
    pub fn remove_item(&mut self, product_id: ProductId) -> CartChange {
        let before = self.items.len();
        self.items.retain(|item| item.product_id() != product_id);

        if self.items.len() < before {
            CartChange::Removed { product_id }
        } else {
            CartChange::Unchanged
        }
    }

    /// Set the quantity of an existing line item.
    ///
    /// A requested quantity of zero or less behaves exactly like
    /// [`Cart::remove_item`]. Updating an id that is not in the cart does nothing.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> CartChange {
        let Some(to) = QuantityUpdate::from_requested(quantity).new_quantity() else {
            return self.remove_item(product_id);
        };

        match self.find_mut(product_id) {
            Some(existing) if existing.quantity == to => CartChange::Unchanged,
            Some(existing) => {
                let from = existing.quantity;
                existing.quantity = to;
                CartChange::QuantityChanged {
                    product_id,
                    from,
                    to,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Empty the cart and report success. Checkout cannot fail.
    pub fn checkout(&mut self) -> CheckoutReceipt {
        let receipt = CheckoutReceipt::new(self.totals(), self.items.len());
        self.items.clear();
        receipt
    }

    fn find_mut(&mut self, product_id: ProductId) -> Option<&mut CartLineItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id() == product_id)
    }
}
