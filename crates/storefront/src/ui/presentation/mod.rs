//! Presentation layer - Dioxus UI components and state

pub mod components;
pub mod state;
