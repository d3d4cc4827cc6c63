//! Reactive application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each struct here is plain data wrapped in one `RwSignal` by `App`.
//! Transitions are methods on the struct so they can be tested without a
//! reactive runtime.

pub mod loading;
pub mod studio;
