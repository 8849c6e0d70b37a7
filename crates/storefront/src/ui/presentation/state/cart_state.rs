//! Cart state management
//!
//! Wraps the domain `Cart` in Dioxus signals so components re-render after
//! every mutation. Each user action maps to exactly one cart operation and is
//! applied synchronously.

use dioxus::prelude::*;
use shophub_domain::{
    Cart, CartChange, CartLineItem, CartTotals, CheckoutReceipt, Product, ProductId,
};

use crate::application::services::CheckoutService;

/// Cart state shared by the header, product grid and cart modal
#[derive(Clone, Copy)]
pub struct CartState {
    /// The shopper's cart
    pub cart: Signal<Cart>,
    /// Whether the cart modal is shown
    pub is_open: Signal<bool>,
    /// Confirmation from the most recent checkout, until dismissed
    pub last_receipt: Signal<Option<CheckoutReceipt>>,
}

impl CartState {
    /// Create a new CartState with an empty, closed cart
    pub fn new() -> Self {
        Self {
            cart: Signal::new(Cart::new()),
            is_open: Signal::new(false),
            last_receipt: Signal::new(None),
        }
    }

    /// Current totals, recomputed from the cart on every call
    pub fn totals(&self) -> CartTotals {
        self.cart.read().totals()
    }

    /// Snapshot of the line items for rendering
    pub fn items(&self) -> Vec<CartLineItem> {
        self.cart.read().items().to_vec()
    }

    pub fn add_item(&mut self, product: &Product) -> CartChange {
        let change = self.cart.write().add_item(product);
        log_change(&change);
        change
    }

    pub fn remove_item(&mut self, product_id: ProductId) -> CartChange {
        if !self.cart.peek().contains(product_id) {
            return CartChange::Unchanged;
        }
        let change = self.cart.write().remove_item(product_id);
        log_change(&change);
        change
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> CartChange {
        if !self.cart.peek().contains(product_id) {
            return CartChange::Unchanged;
        }
        let change = self.cart.write().update_quantity(product_id, quantity);
        log_change(&change);
        change
    }

    /// Check out, close the modal and keep the receipt for the confirmation toast
    pub fn checkout(&mut self) -> CheckoutReceipt {
        let receipt = {
            let mut cart = self.cart.write();
            CheckoutService::new().complete(&mut cart)
        };
        self.is_open.set(false);
        self.last_receipt.set(Some(receipt.clone()));
        receipt
    }

    pub fn open(&mut self) {
        self.is_open.set(true);
    }

    pub fn close(&mut self) {
        self.is_open.set(false);
    }

    pub fn dismiss_receipt(&mut self) {
        self.last_receipt.set(None);
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the CartState from Dioxus context
pub fn use_cart_state() -> CartState {
    use_context::<CartState>()
}

// No-ops stay silent.
fn log_change(change: &CartChange) {
    if !change.is_change() {
        return;
    }
    if let Some(product_id) = change.product_id() {
        tracing::debug!(%product_id, ?change, "Cart updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_domain::{Catalog, CHECKOUT_CONFIRMATION};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// What a test body saw after driving a `CartState` inside a live runtime
    #[derive(Clone, Default)]
    struct Observed(Rc<RefCell<Vec<String>>>);

    impl Observed {
        fn push(&self, line: impl Into<String>) {
            self.0.borrow_mut().push(line.into());
        }

        fn lines(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    /// Signals need an owning scope, so each test body runs as a root component.
    fn run_in_component(body: fn(&mut CartState, &Observed)) -> Vec<String> {
        #[derive(Clone)]
        struct Props {
            body: fn(&mut CartState, &Observed),
            observed: Observed,
        }

        fn harness(props: Props) -> Element {
            use_hook(|| {
                let mut state = CartState::new();
                (props.body)(&mut state, &props.observed);
            });
            rsx! {}
        }

        let observed = Observed::default();
        let mut dom = VirtualDom::new_with_props(
            harness,
            Props {
                body,
                observed: observed.clone(),
            },
        );
        dom.rebuild_in_place();
        observed.lines()
    }

    fn demo_catalog() -> Catalog {
        Catalog::demo().unwrap()
    }

    #[test]
    fn checkout_closes_modal_and_keeps_receipt() {
        let lines = run_in_component(|state, observed| {
            let catalog = demo_catalog();
            state.open();
            state.add_item(catalog.get(ProductId::new(2)).unwrap());
            state.add_item(catalog.get(ProductId::new(3)).unwrap());

            let receipt = state.checkout();

            observed.push(format!("open={}", state.is_open.peek()));
            observed.push(format!("empty={}", state.cart.peek().is_empty()));
            let stored = state.last_receipt.peek().clone();
            observed.push(format!("stored_matches={}", stored.as_ref() == Some(&receipt)));
            observed.push(format!("message={}", receipt.message));
            observed.push(format!("items={}", receipt.totals.item_count));
        });

        assert_eq!(
            lines,
            vec![
                "open=false".to_string(),
                "empty=true".to_string(),
                "stored_matches=true".to_string(),
                format!("message={}", CHECKOUT_CONFIRMATION),
                "items=2".to_string(),
            ]
        );
    }

    #[test]
    fn dismissing_receipt_clears_it() {
        let lines = run_in_component(|state, observed| {
            state.checkout();
            observed.push(format!("before={}", state.last_receipt.peek().is_some()));
            state.dismiss_receipt();
            observed.push(format!("after={}", state.last_receipt.peek().is_some()));
        });

        assert_eq!(lines, vec!["before=true", "after=false"]);
    }

    #[test]
    fn absent_ids_leave_cart_untouched() {
        let lines = run_in_component(|state, observed| {
            let catalog = demo_catalog();
            state.add_item(catalog.get(ProductId::new(1)).unwrap());
            let before = state.cart.peek().clone();

            let removed = state.remove_item(ProductId::new(42));
            let updated = state.update_quantity(ProductId::new(42), 3);

            observed.push(format!("removed_is_change={}", removed.is_change()));
            observed.push(format!("updated_is_change={}", updated.is_change()));
            observed.push(format!("same_cart={}", *state.cart.peek() == before));
        });

        assert_eq!(
            lines,
            vec![
                "removed_is_change=false",
                "updated_is_change=false",
                "same_cart=true"
            ]
        );
    }

    #[test]
    fn quantity_controls_follow_cart_rules() {
        let lines = run_in_component(|state, observed| {
            let catalog = demo_catalog();
            let id = ProductId::new(5);
            state.add_item(catalog.get(id).unwrap());

            state.update_quantity(id, 3);
            observed.push(format!("count={}", state.totals().item_count));

            let change = state.update_quantity(id, 0);
            observed.push(format!("removed={}", change == CartChange::Removed { product_id: id }));
            observed.push(format!("count={}", state.totals().item_count));
        });

        assert_eq!(lines, vec!["count=3", "removed=true", "count=0"]);
    }
}
