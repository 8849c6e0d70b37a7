//! Domain Events
//!
//! ## Aggregate Mutation Events
//!
//! The `cart_events` submodule contains return types from cart mutations,
//! communicating what happened when state was modified.

pub mod cart_events;

pub use cart_events::*;
