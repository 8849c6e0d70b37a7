//! Checkout confirmation toast
//!
//! Shown after checkout with the receipt message and what was purchased.
//! Dismissed by clicking anywhere on it.

use dioxus::prelude::*;

use crate::presentation::state::use_cart_state;

#[component]
pub fn CheckoutToast() -> Element {
    let mut cart_state = use_cart_state();
    let receipt = cart_state.last_receipt.read().clone();

    rsx! {
        if let Some(receipt) = receipt {
            div {
                class: "checkout-toast",
                onclick: move |_| cart_state.dismiss_receipt(),
                div {
                    class: "checkout-toast-header",
                    span { "✅" }
                    h3 { "Order placed" }
                    button {
                        class: "close-btn",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            cart_state.dismiss_receipt();
                        },
                        "×"
                    }
                }
                p { "{receipt.message}" }
                if receipt.totals.item_count > 0 {
                    p {
                        class: "checkout-toast-summary",
                        "{receipt.totals.item_count} item(s), {receipt.totals.price}"
                    }
                }
            }
        }
    }
}
