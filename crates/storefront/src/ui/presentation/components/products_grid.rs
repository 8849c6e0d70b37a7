//! Product grid
//!
//! Renders every catalog product as a card with an "Add to Cart" button.

use dioxus::prelude::*;
use shophub_domain::{Catalog, Product};

use crate::presentation::state::use_cart_state;

#[component]
pub fn ProductsGrid() -> Element {
    // Provided by the composition root (see `crates/storefront/src/main.rs`).
    let catalog = use_context::<Catalog>();

    rsx! {
        section {
            class: "products-section",
            div {
                class: "container",
                h2 { class: "section-title", "Our Products" }
                div {
                    class: "products-grid",
                    for product in catalog.products().iter().cloned() {
                        ProductCard { key: "{product.id}", product }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let mut cart_state = use_cart_state();
    let price = product.price.to_string();
    let emoji = product.emoji.clone();
    let name = product.name.to_string();
    let description = product.description.clone();

    rsx! {
        div {
            class: "product-card",
            div { class: "product-image", "{emoji}" }
            div {
                class: "product-info",
                h3 { class: "product-name", "{name}" }
                p { class: "product-description", "{description}" }
                div {
                    class: "product-footer",
                    span { class: "product-price", "{price}" }
                    button {
                        class: "add-to-cart-btn",
                        onclick: move |_| {
                            cart_state.add_item(&product);
                        },
                        "Add to Cart"
                    }
                }
            }
        }
    }
}
