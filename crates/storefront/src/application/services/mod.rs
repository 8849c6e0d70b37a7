//! Application services - use cases invoked by the presentation layer

mod checkout_service;

pub use checkout_service::CheckoutService;
