//! Shared constants for the storyboard crate.

// ── Shot table ──────────────────────────────────────────────────

/// Header cell that marks the start of the shot table (the shot-number column).
pub const SHOT_TABLE_MARKER: &str = "| 镜号 |";

/// Column delimiter for markdown table rows.
pub const COLUMN_DELIMITER: char = '|';

/// Number of columns a row must yield to become a shot.
pub const SHOT_COLUMNS: usize = 6;

/// Shown on a gallery card when a shot has no audio.
pub const EMPTY_AUDIO_PLACEHOLDER: &str = "无对白";

// ── Generation ──────────────────────────────────────────────────

/// Separates variant A from variant B in one generated blob.
pub const VERSION_SPLIT: &str = "===VERSION_SPLIT===";

/// Substituted for variant B when the blob carries no separator.
pub const MALFORMED_VARIANT_PLACEHOLDER: &str = "生成格式异常，请查看完整内容。";

/// Sidebar footer while the server runs in demo mode.
pub const DEMO_FOOTER_LABEL: &str = "Gemini 3 Flash Generation (Demo Mode)";

// ── Gallery gestures ────────────────────────────────────────────

/// Pointer displacement is multiplied by this before scrolling.
pub const DRAG_SENSITIVITY: f64 = 2.0;

/// Scaled displacement (px) above which a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// How long the click fired at the end of a drag is swallowed.
pub const CLICK_GUARD_MS: u32 = 50;
