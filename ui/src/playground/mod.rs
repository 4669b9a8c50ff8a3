//! The results panel of the playground and the data it renders.

mod cli;
mod model;
mod panel;
mod payload;
mod view;

pub use cli::{format_cli_line, format_cli_report};
pub use model::{
    CheckOutcome, Diagnostic, PanelConfig, RunResult, Severity, SourceRange, Tab, UnknownTab,
    DEFAULT_ERROR_KINDS_URL,
};
pub use panel::ResultsPanel;
pub use payload::{decode_response, PayloadError};
pub use view::{select_view, PanelView};
