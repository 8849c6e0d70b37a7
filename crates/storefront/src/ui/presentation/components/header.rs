//! Store header with the cart button

use dioxus::prelude::*;

use crate::presentation::state::use_cart_state;

/// Logo plus a "Cart" button; the badge only shows once something is in the cart.
#[component]
pub fn Header() -> Element {
    let mut cart_state = use_cart_state();
    let cart_count = cart_state.totals().item_count;

    rsx! {
        header {
            class: "header",
            div {
                class: "container",
                div {
                    class: "header-content",
                    div { class: "logo", "🛍️ ShopHub" }
                    button {
                        class: "cart-button",
                        onclick: move |_| cart_state.open(),
                        span { "Cart" }
                        if cart_count > 0 {
                            span { class: "cart-count", "{cart_count}" }
                        }
                    }
                }
            }
        }
    }
}
