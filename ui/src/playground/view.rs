//! Selection of the single view the results panel shows.

use super::model::{CheckOutcome, Diagnostic, RunResult, Tab};

/// Exactly one of these renders per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView<'a> {
    Loading,
    Diagnostics(&'a [Diagnostic]),
    InternalError(&'a str),
    FetchFailed,
    NoErrors,
    Running,
    Output(&'a str),
    RunPrompt,
}

/// Pick the view for the current inputs.
///
/// Loading wins over every tab. On the errors tab the fallbacks rank
/// diagnostics, then an internal error, then a failed fetch, then a clean
/// run; a stale internal error never hides fresh diagnostics.
pub fn select_view(loading: bool, is_running: bool, tab: Tab, result: &RunResult) -> PanelView<'_> {
    if loading {
        return PanelView::Loading;
    }

    match tab {
        Tab::Errors => match &result.outcome {
            CheckOutcome::Succeeded(diagnostics) if !diagnostics.is_empty() => {
                PanelView::Diagnostics(diagnostics)
            }
            _ if !result.internal_error.is_empty() => {
                PanelView::InternalError(&result.internal_error)
            }
            CheckOutcome::Pending | CheckOutcome::Failed => PanelView::FetchFailed,
            CheckOutcome::Succeeded(_) => PanelView::NoErrors,
        },
        Tab::Output => {
            if is_running {
                return PanelView::Running;
            }
            match result.program_output.trim_start() {
                "" => PanelView::RunPrompt,
                output => PanelView::Output(output),
            }
        }
    }
}
