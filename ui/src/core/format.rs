//! Formatting helpers for presenting checker results.

use crate::playground::SourceRange;

/// Render a source range the way the command-line checker prints it.
///
/// - `3:5` when start and end coincide
/// - `3:5-9` when the range stays on one line
/// - `3:5-4:2` otherwise
///
/// Coordinates are printed verbatim; nothing is clamped or validated.
pub fn format_range(range: SourceRange) -> String {
    let SourceRange {
        start_line,
        start_column,
        end_line,
        end_column,
    } = range;

    if start_line == end_line {
        if start_column == end_column {
            format!("{start_line}:{start_column}")
        } else {
            format!("{start_line}:{start_column}-{end_column}")
        }
    } else {
        format!("{start_line}:{start_column}-{end_line}:{end_column}")
    }
}
