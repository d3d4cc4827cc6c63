//! Shot-table extraction from a generated markdown document.
//!
//! The generated plan is free text; only the shot table is machine-read. The
//! extractor scans line by line for the shot-number header, then captures
//! pipe-delimited rows until the table ends. It is deliberately tolerant:
//! rows of the wrong shape are skipped, never reported.

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;

use crate::consts::{COLUMN_DELIMITER, SHOT_COLUMNS, SHOT_TABLE_MARKER};
use crate::shot::ShotRecord;

/// Extract the shots of the first shot table in `markdown`.
///
/// Returns an empty vector when no header row is found. Capture ends at the
/// first blank line or heading after at least one shot has been read, so a
/// second table sharing the header is never parsed.
#[must_use]
pub fn extract(markdown: &str) -> Vec<ShotRecord> {
    let mut shots = Vec::new();
    let mut capturing = false;

    for line in markdown.lines().map(str::trim) {
        if line.contains(SHOT_TABLE_MARKER) {
            capturing = true;
            continue;
        }
        if !capturing {
            continue;
        }
        if is_divider_row(line) {
            continue;
        }
        if !shots.is_empty() && ends_table(line) {
            break;
        }
        if !line.starts_with(COLUMN_DELIMITER) {
            continue;
        }
        if let Some(shot) = parse_row(line) {
            shots.push(shot);
        }
    }

    shots
}

/// Split a table row into trimmed, non-empty cells.
fn split_cells(line: &str) -> Vec<&str> {
    line.split(COLUMN_DELIMITER)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn parse_row(line: &str) -> Option<ShotRecord> {
    let cells = split_cells(line);
    if cells.len() < SHOT_COLUMNS {
        return None;
    }
    ShotRecord::from_cells(&cells)
}

/// A `| --- | :---: |` style separator between header and body.
fn is_divider_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| c == COLUMN_DELIMITER || c == '-' || c == ':' || c.is_whitespace())
}

fn ends_table(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}
