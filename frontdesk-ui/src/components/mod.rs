//! UI Components
//!
//! Reusable Leptos components.

pub mod counter;

pub use counter::Counter;
