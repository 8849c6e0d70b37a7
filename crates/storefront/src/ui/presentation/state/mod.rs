//! Signal-backed UI state

mod cart_state;

pub use cart_state::{use_cart_state, CartState};
