//! Storyboard model and interaction logic for the planning studio.
//!
//! This crate holds everything about a generated storyboard that does not
//! depend on a browser or a network: splitting a generated blob into its two
//! narrative variants, extracting shot rows from the markdown shot table, and
//! the drag-to-scroll gallery state machine. The Leptos client hosts these
//! types and applies the returned [`gallery::GalleryAction`]s to the DOM; the
//! server uses [`variant`] and [`demo`] to answer generation requests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`shot`] | `ShotRecord` and its display helpers |
//! | [`extract`] | Markdown shot-table extractor |
//! | [`variant`] | `Variant` tabs and `GenerationResult` splitting |
//! | [`gallery`] | Gallery selection and the pointer gesture state machine |
//! | [`demo`] | Canned two-variant document used in demo mode |
//! | [`api`] | HTTP request/response bodies shared with the server |
//! | [`consts`] | Shared literals (markers, placeholders, thresholds) |

pub mod api;
pub mod consts;
pub mod demo;
pub mod extract;
pub mod gallery;
pub mod shot;
pub mod variant;

pub use extract::extract;
pub use shot::ShotRecord;
pub use variant::{GenerationResult, Variant};
