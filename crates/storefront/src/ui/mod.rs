use dioxus::prelude::*;
use std::str::FromStr;

use crate::config::{ConfigError, StorefrontConfig};

pub mod presentation;

use presentation::components::{CartModal, CheckoutToast, Header, Hero, ProductsGrid};

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl FromStr for ShellKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            _ => Err(ConfigError::UnknownShell(s.trim().to_string())),
        }
    }
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/storefront/src/main.rs`).
    let config = use_context::<StorefrontConfig>();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::CartState::new);

    rsx! {
        document::Title { "{config.title}" }
        document::Stylesheet {
            href: asset!("/assets/css/storefront.css"),
        }

        {
            match config.shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        Storefront {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        Storefront {}
                    }
                },
            }
        }
    }
}

#[component]
fn Storefront() -> Element {
    rsx! {
        main {
            Header {}
            Hero {}
            ProductsGrid {}
            CartModal {}
            CheckoutToast {}
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-mobile",
            {children}
        }
    }
}
