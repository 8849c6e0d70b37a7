//! Cart modal
//!
//! Overlay listing cart line items with quantity controls, removal, the
//! running total and the checkout button. Clicking the backdrop or the close
//! button hides it; clicks inside the panel do not.

use dioxus::prelude::*;
use shophub_domain::CartLineItem;

use crate::presentation::state::use_cart_state;

#[component]
pub fn CartModal() -> Element {
    let mut cart_state = use_cart_state();

    if !*cart_state.is_open.read() {
        return rsx! {};
    }

    let items = cart_state.items();
    let total_price = cart_state.totals().price.to_string();

    rsx! {
        div {
            class: "cart-modal",
            onclick: move |_| cart_state.close(),
            div {
                class: "cart-content",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "cart-header",
                    h2 { "Shopping Cart" }
                    button {
                        class: "close-btn",
                        onclick: move |_| cart_state.close(),
                        "×"
                    }
                }

                if items.is_empty() {
                    div {
                        class: "empty-cart",
                        p { "Your cart is empty" }
                        p { style: "font-size: 3rem; margin-top: 1rem;", "🛒" }
                    }
                } else {
                    div {
                        class: "cart-items",
                        for item in items {
                            CartItemRow { key: "{item.product_id()}", item }
                        }
                    }

                    div {
                        class: "cart-footer",
                        div {
                            class: "cart-total",
                            span { "Total:" }
                            span { "{total_price}" }
                        }
                        button {
                            class: "checkout-btn",
                            onclick: move |_| {
                                cart_state.checkout();
                            },
                            "Proceed to Checkout"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CartItemRow(item: CartLineItem) -> Element {
    let mut cart_state = use_cart_state();

    let product_id = item.product_id();
    let quantity = i64::from(item.quantity());
    let product = item.product();
    let label = format!("{} {}", product.emoji, product.name);
    let unit_price = product.price.to_string();

    rsx! {
        div {
            class: "cart-item",
            div {
                class: "cart-item-info",
                div { class: "cart-item-name", "{label}" }
                div { class: "cart-item-price", "{unit_price} each" }
            }
            div {
                class: "cart-item-actions",
                div {
                    class: "quantity-controls",
                    button {
                        class: "quantity-btn",
                        onclick: move |_| {
                            cart_state.update_quantity(product_id, quantity - 1);
                        },
                        "−"
                    }
                    span { class: "quantity", "{quantity}" }
                    button {
                        class: "quantity-btn",
                        onclick: move |_| {
                            cart_state.update_quantity(product_id, quantity + 1);
                        },
                        "+"
                    }
                }
                button {
                    class: "remove-btn",
                    onclick: move |_| {
                        cart_state.remove_item(product_id);
                    },
                    "Remove"
                }
            }
        }
    }
}
