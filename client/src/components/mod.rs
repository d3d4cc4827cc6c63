//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `StudioState` signal from context;
//! the gallery keeps its own gesture state locally.

pub mod brief_input;
pub mod loading_view;
pub mod markdown_view;
pub mod shot_detail;
pub mod sidebar;
pub mod storyboard_gallery;
pub mod suggestion_chips;
pub mod variant_tabs;
