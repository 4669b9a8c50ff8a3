//! Data handed to the results panel by its host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 1-based source range as reported by the checker.
///
/// Start is expected to precede end but nothing here relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRange {
    #[serde(alias = "startLineNumber")]
    pub start_line: i32,
    pub start_column: i32,
    #[serde(alias = "endLineNumber")]
    pub end_line: i32,
    pub end_column: i32,
}

impl SourceRange {
    pub fn new(start_line: i32, start_column: i32, end_line: i32, end_column: i32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }
}

/// Severity code attached to a diagnostic.
///
/// Codes follow the editor marker convention the checker emits
/// (8 error, 4 warning, 2 info, 1 hint). Anything else is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
    Hint,
    Other(i32),
}

impl Severity {
    pub fn code(self) -> i32 {
        match self {
            Severity::Error => 8,
            Severity::Warning => 4,
            Severity::Info => 2,
            Severity::Hint => 1,
            Severity::Other(code) => code,
        }
    }

    /// Label used by the command-line output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error | Severity::Other(_) => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
            Severity::Hint => "HINT",
        }
    }

    /// CSS modifier for a diagnostic entry.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Error | Severity::Other(_) => "results-panel__entry--error",
            Severity::Warning => "results-panel__entry--warning",
            Severity::Info | Severity::Hint => "results-panel__entry--info",
        }
    }
}

impl From<i32> for Severity {
    fn from(code: i32) -> Self {
        match code {
            8 => Severity::Error,
            4 => Severity::Warning,
            2 => Severity::Info,
            1 => Severity::Hint,
            other => Severity::Other(other),
        }
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

/// A single reported issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub range: SourceRange,
    pub message: String,
    /// Kind slug; doubles as the anchor in the error-kinds reference.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub severity: Severity,
}

/// What the last check produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckOutcome {
    /// Nothing fetched yet.
    #[default]
    Pending,
    /// The checker could not be reached or its reply was unusable.
    Failed,
    /// Diagnostics in source order. May be empty.
    Succeeded(Vec<Diagnostic>),
}

impl CheckOutcome {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CheckOutcome::Succeeded(diagnostics) => diagnostics,
            CheckOutcome::Pending | CheckOutcome::Failed => &[],
        }
    }
}

/// Everything one check/run invocation produced, as seen by the panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunResult {
    pub outcome: CheckOutcome,
    /// Non-empty when the checker itself failed.
    pub internal_error: String,
    pub program_output: String,
}

/// Results panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Errors,
    Output,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Errors, Tab::Output];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Errors => "errors",
            Tab::Output => "output",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown results tab `{0}`")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "errors" => Ok(Tab::Errors),
            "output" => Ok(Tab::Output),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}

/// Defaults the host resolves once when it mounts the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Tab shown before the user picks one.
    pub initial_tab: Tab,
    /// Reference page whose anchors are the kind slugs.
    pub error_kinds_url: String,
    /// Artificial latency for replayed checker replies, in milliseconds.
    pub replay_delay_ms: u64,
}

pub const DEFAULT_ERROR_KINDS_URL: &str = "/en/docs/error-kinds/";

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial_tab: Tab::Errors,
            error_kinds_url: DEFAULT_ERROR_KINDS_URL.to_string(),
            replay_delay_ms: 350,
        }
    }
}

impl PanelConfig {
    /// Link target for a kind slug. The slug is used verbatim.
    pub fn kind_href(&self, kind: &str) -> String {
        format!("{}#{kind}", self.error_kinds_url)
    }
}
