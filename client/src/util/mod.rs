//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps browser APIs and pure formatting out of components so the pure
//! parts can be unit-tested natively.

pub mod clipboard;
pub mod markdown;
pub mod parallax;
