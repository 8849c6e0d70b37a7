use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "container",
                h1 { "Welcome to ShopHub" }
                p { "Discover amazing products at great prices" }
            }
        }
    }
}
