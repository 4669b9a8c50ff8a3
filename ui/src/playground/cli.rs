//! Plain-text rendering matching the command-line checker.

use crate::core::format::format_range;

use super::model::Diagnostic;

/// `ERROR 3:5-9: message [kind]`
pub fn format_cli_line(diagnostic: &Diagnostic) -> String {
    format!(
        "{} {}: {} [{}]",
        diagnostic.severity.label(),
        format_range(diagnostic.range),
        diagnostic.message,
        diagnostic.kind
    )
}

/// One line per diagnostic, in order.
pub fn format_cli_report(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(format_cli_line)
        .collect::<Vec<_>>()
        .join("\n")
}
