//! Studio session state: brief, generation lifecycle, and active variant.
//!
//! DESIGN
//! ======
//! Both generate buttons go through [`StudioState::begin_generation`]. Each
//! call hands out a [`GenerationTicket`]; only the most recently issued
//! ticket may complete or fail the session, so a late reply from a
//! superseded request is dropped instead of overwriting newer results.

#[cfg(test)]
#[path = "studio_test.rs"]
mod studio_test;

use storyboard::api::ServiceStatus;
use storyboard::{GenerationResult, Variant};

/// Shown for any failed generation, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str = "生成失败，请检查网络或重试。";

/// Proof that a generation was started, carried to its completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationTicket {
    pub seq: u64,
    /// Brief as sent, trimmed.
    pub brief: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudioState {
    pub brief: String,
    pub loading: bool,
    pub result: Option<GenerationResult>,
    pub active: Variant,
    /// Empty when there is nothing to report.
    pub error: String,
    /// Flips to `true` on the first success and never back.
    pub has_generated: bool,
    pub request_seq: u64,
    /// Server mode, fetched once after hydration.
    pub status: Option<ServiceStatus>,
}

impl StudioState {
    /// Start a generation for the current brief.
    ///
    /// Returns `None` and leaves state untouched when the brief is blank.
    pub fn begin_generation(&mut self) -> Option<GenerationTicket> {
        let brief = self.brief.trim();
        if brief.is_empty() {
            return None;
        }
        let brief = brief.to_owned();
        self.request_seq += 1;
        self.loading = true;
        self.error.clear();
        self.result = None;
        Some(GenerationTicket { seq: self.request_seq, brief })
    }

    pub fn is_latest(&self, ticket: &GenerationTicket) -> bool {
        ticket.seq == self.request_seq
    }

    /// Apply a successful result. Returns `false` for a stale ticket.
    pub fn complete_generation(&mut self, ticket: &GenerationTicket, result: GenerationResult) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.result = Some(result);
        self.has_generated = true;
        self.loading = false;
        true
    }

    /// Record a failure with a user-facing message (normally
    /// [`GENERATION_FAILED_MESSAGE`]). Returns `false` for a stale ticket.
    pub fn fail_generation(&mut self, ticket: &GenerationTicket, message: &str) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.loading = false;
        message.clone_into(&mut self.error);
        true
    }

    /// Markdown of the active variant, empty before the first result.
    pub fn active_markdown(&self) -> &str {
        self.result
            .as_ref()
            .map_or("", |result| result.variant(self.active))
    }

    pub fn select_variant(&mut self, variant: Variant) {
        self.active = variant;
    }

    /// Generate buttons are enabled only with a non-blank brief and no
    /// request in flight.
    pub fn can_generate(&self) -> bool {
        !self.loading && !self.brief.trim().is_empty()
    }
}
