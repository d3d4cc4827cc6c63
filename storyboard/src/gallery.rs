//! Shot gallery: card selection plus the drag-to-scroll gesture machine.
//!
//! The gallery strip can be panned by pressing and dragging, and a card can
//! be opened by clicking it. Both gestures start with the same pointer-down,
//! so the machine tracks how far the pointer has travelled: once the scaled
//! displacement passes the threshold the session is a drag, and the click the
//! browser fires on release is swallowed by a short-lived click guard.
//!
//! [`Gallery`] knows nothing about the DOM. The host feeds it pointer
//! positions and scroll offsets, and applies the returned [`GalleryAction`]s.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::consts::{CLICK_GUARD_MS, DRAG_SENSITIVITY, DRAG_THRESHOLD_PX};
use crate::shot::ShotRecord;

/// Tunables for drag detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Multiplier applied to pointer displacement before scrolling.
    pub sensitivity: f64,
    /// Scaled displacement (px) that turns a press into a drag.
    pub drag_threshold_px: f64,
    /// Delay before the post-drag click guard is released.
    pub click_guard_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { sensitivity: DRAG_SENSITIVITY, drag_threshold_px: DRAG_THRESHOLD_PX, click_guard_ms: CLICK_GUARD_MS }
    }
}

/// Pointer session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No button held over the strip.
    #[default]
    Idle,
    /// Button held; movement so far stays under the drag threshold.
    Pressed {
        /// Pointer x (relative to the strip) at pointer-down.
        start_x: f64,
        /// Strip scroll offset at pointer-down.
        start_scroll: f64,
    },
    /// Button held and the threshold has been crossed.
    Dragging {
        start_x: f64,
        start_scroll: f64,
    },
}

impl GestureState {
    /// Whether a button is currently held over the strip.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Pointer cursor the host should show over the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Side effects for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    /// Set the strip's horizontal scroll offset.
    ScrollTo(f64),
    /// Change the strip cursor.
    SetCursor(Cursor),
    /// Call [`Gallery::release_click_guard`] after the given delay.
    ScheduleClickGuardRelease { after_ms: u32 },
    /// The selected card changed.
    SelectionChanged(Option<usize>),
}

/// Shots shown in the strip, the open detail card, and the live gesture.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    shots: Vec<ShotRecord>,
    selected: Option<usize>,
    gesture: GestureState,
    click_guard: bool,
    config: GestureConfig,
}

impl Gallery {
    #[must_use]
    pub fn new(shots: Vec<ShotRecord>) -> Self {
        Self::with_config(shots, GestureConfig::default())
    }

    #[must_use]
    pub fn with_config(shots: Vec<ShotRecord>, config: GestureConfig) -> Self {
        Self { shots, config, ..Self::default() }
    }

    /// Replace the shots (e.g. after switching variant). Clears selection and
    /// any gesture in progress.
    pub fn load(&mut self, shots: Vec<ShotRecord>) {
        self.shots = shots;
        self.selected = None;
        self.gesture = GestureState::Idle;
        self.click_guard = false;
    }

    // --- Queries ---

    #[must_use]
    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Index of the open detail card.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The open detail card's shot.
    #[must_use]
    pub fn selected_shot(&self) -> Option<&ShotRecord> {
        self.selected.and_then(|i| self.shots.get(i))
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Whether the next card click will be swallowed.
    #[must_use]
    pub fn click_guard_armed(&self) -> bool {
        self.click_guard
    }

    // --- Pointer input ---

    /// Button pressed on the strip at `x`, with the strip scrolled to `scroll`.
    pub fn on_pointer_down(&mut self, x: f64, scroll: f64) -> Vec<GalleryAction> {
        self.gesture = GestureState::Pressed { start_x: x, start_scroll: scroll };
        self.click_guard = false;
        vec![GalleryAction::SetCursor(Cursor::Grabbing)]
    }

    /// Pointer moved to `x`. Scrolls while a button is held.
    pub fn on_pointer_move(&mut self, x: f64) -> Vec<GalleryAction> {
        let (start_x, start_scroll) = match self.gesture {
            GestureState::Idle => return Vec::new(),
            GestureState::Pressed { start_x, start_scroll } | GestureState::Dragging { start_x, start_scroll } => {
                (start_x, start_scroll)
            }
        };

        let walk = (x - start_x) * self.config.sensitivity;
        if walk.abs() > self.config.drag_threshold_px {
            self.gesture = GestureState::Dragging { start_x, start_scroll };
        }
        vec![GalleryAction::ScrollTo(start_scroll - walk)]
    }

    /// Button released over the strip.
    pub fn on_pointer_up(&mut self) -> Vec<GalleryAction> {
        self.end_session()
    }

    /// Pointer left the strip; ends the session like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<GalleryAction> {
        self.end_session()
    }

    fn end_session(&mut self) -> Vec<GalleryAction> {
        let previous = std::mem::take(&mut self.gesture);
        match previous {
            GestureState::Idle => Vec::new(),
            GestureState::Pressed { .. } => vec![GalleryAction::SetCursor(Cursor::Grab)],
            GestureState::Dragging { .. } => {
                self.click_guard = true;
                vec![
                    GalleryAction::SetCursor(Cursor::Grab),
                    GalleryAction::ScheduleClickGuardRelease { after_ms: self.config.click_guard_ms },
                ]
            }
        }
    }

    /// Host timer fired after a drag ended.
    pub fn release_click_guard(&mut self) {
        self.click_guard = false;
    }

    // --- Selection ---

    /// A card was clicked. Ignored right after a drag or for unknown cards.
    pub fn on_card_click(&mut self, index: usize) -> Vec<GalleryAction> {
        if self.click_guard || index >= self.shots.len() || self.selected == Some(index) {
            return Vec::new();
        }
        self.selected = Some(index);
        vec![GalleryAction::SelectionChanged(self.selected)]
    }

    /// Close the detail card.
    pub fn dismiss(&mut self) -> Vec<GalleryAction> {
        if self.selected.take().is_none() {
            return Vec::new();
        }
        vec![GalleryAction::SelectionChanged(None)]
    }
}
