extern crate self as shophub_domain;

pub mod aggregates;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Cart, CartLineItem};
pub use catalog::Catalog;
pub use entities::Product;
pub use error::DomainError;
pub use events::{CartChange, CartTotals, CheckoutReceipt, CHECKOUT_CONFIRMATION};
pub use ids::ProductId;
pub use value_objects::{Money, ProductName, QuantityUpdate};
