//! A single row of the storyboard shot table.

#[cfg(test)]
#[path = "shot_test.rs"]
mod shot_test;

use serde::{Deserialize, Serialize};

use crate::consts::EMPTY_AUDIO_PLACEHOLDER;

/// One shot of a storyboard, as extracted from the shot table.
///
/// Field order matches the table's column order. The `id` is whatever the
/// shot-number cell contained; it is not guaranteed to be numeric or unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Shot number label.
    pub id: String,
    /// Framing, shot size and camera movement.
    pub visual: String,
    /// Sound, music or dialogue. May be empty.
    pub audio: String,
    /// On-screen text or graphics.
    pub subtitle: String,
    /// Physical or digital assets used in the shot.
    pub props: String,
    /// Narrative role of the shot (pain point, solution, value, ...).
    pub purpose: String,
}

impl ShotRecord {
    /// Build a record from the first six cells of a table row.
    ///
    /// Returns `None` when fewer than six cells are given; extra cells are
    /// ignored.
    #[must_use]
    pub fn from_cells(cells: &[&str]) -> Option<Self> {
        let [id, visual, audio, subtitle, props, purpose, ..] = cells else {
            return None;
        };
        Some(Self {
            id: (*id).to_owned(),
            visual: (*visual).to_owned(),
            audio: (*audio).to_owned(),
            subtitle: (*subtitle).to_owned(),
            props: (*props).to_owned(),
            purpose: (*purpose).to_owned(),
        })
    }

    /// The id left-padded with `0` to two characters (`"1"` → `"01"`).
    #[must_use]
    pub fn display_number(&self) -> String {
        let width = self.id.chars().count();
        if width >= 2 {
            return self.id.clone();
        }
        format!("{}{}", "0".repeat(2 - width), self.id)
    }

    /// The audio description, or a fixed placeholder when there is none.
    #[must_use]
    pub fn audio_or_placeholder(&self) -> &str {
        if self.audio.is_empty() { EMPTY_AUDIO_PLACEHOLDER } else { &self.audio }
    }
}
