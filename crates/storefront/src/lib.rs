//! Unified storefront crate.
//!
//! This crate contains the UI, cart state and checkout service.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod config;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::StorefrontConfig;
pub use ui::{app, ShellKind};
