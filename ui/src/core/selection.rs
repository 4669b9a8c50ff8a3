//! Mapping checker positions onto the source text.

use crate::playground::SourceRange;

/// Half-open span in UTF-16 code units, the unit browser text controls use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

/// Resolve a 1-based range to offsets inside `source`.
///
/// Columns past the end of a line clamp to the line end. Returns `None` when
/// either line is outside the text. Reversed ranges are normalised.
pub fn range_to_span(source: &str, range: SourceRange) -> Option<TextSpan> {
    let start = position_offset(source, range.start_line, range.start_column)?;
    let end = position_offset(source, range.end_line, range.end_column)?;
    Some(TextSpan {
        start: start.min(end),
        end: start.max(end),
    })
}

fn position_offset(source: &str, line: i32, column: i32) -> Option<usize> {
    let line = usize::try_from(line).ok().filter(|&l| l >= 1)?;
    let column = usize::try_from(column.max(1) - 1).unwrap_or(0);

    let mut offset = 0;
    for (index, text) in source.split('\n').enumerate() {
        let width = text.encode_utf16().count();
        if index + 1 == line {
            let visible = text.trim_end_matches('\r').encode_utf16().count();
            return Some(offset + column.min(visible));
        }
        offset += width + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "def f(x: int) -> str:\n    return x\n";

    #[test]
    fn resolves_single_line_range() {
        let span = range_to_span(SOURCE, SourceRange::new(2, 12, 2, 13)).unwrap();
        assert_eq!(span, TextSpan { start: 33, end: 34 });
        let text: String = SOURCE.chars().skip(span.start).take(span.end - span.start).collect();
        assert_eq!(text, "x");
    }

    #[test]
    fn resolves_multi_line_range() {
        let span = range_to_span(SOURCE, SourceRange::new(1, 1, 2, 5)).unwrap();
        assert_eq!(span, TextSpan { start: 0, end: 26 });
    }

    #[test]
    fn clamps_columns_to_line_end() {
        let span = range_to_span(SOURCE, SourceRange::new(1, 100, 1, 200)).unwrap();
        assert_eq!(span, TextSpan { start: 21, end: 21 });
    }

    #[test]
    fn rejects_lines_outside_source() {
        assert_eq!(range_to_span(SOURCE, SourceRange::new(0, 1, 1, 1)), None);
        assert_eq!(range_to_span(SOURCE, SourceRange::new(1, 1, 9, 1)), None);
    }

    #[test]
    fn counts_utf16_units() {
        let source = "s = \"😀\"\nt = 1";
        let span = range_to_span(source, SourceRange::new(2, 1, 2, 2)).unwrap();
        // The emoji occupies two UTF-16 units.
        assert_eq!(span.start, 9);
        assert_eq!(span.end, 10);
    }

    #[test]
    fn normalises_reversed_ranges() {
        let span = range_to_span(SOURCE, SourceRange::new(2, 5, 1, 1)).unwrap();
        assert_eq!(span, TextSpan { start: 0, end: 26 });
    }
}
