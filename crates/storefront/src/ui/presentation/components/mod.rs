//! Storefront UI components.

mod cart_modal;
mod checkout_toast;
mod header;
mod hero;
mod products_grid;

pub use cart_modal::CartModal;
pub use checkout_toast::CheckoutToast;
pub use header::Header;
pub use hero::Hero;
pub use products_grid::ProductsGrid;
