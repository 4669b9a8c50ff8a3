//! Decoding of the checker service's JSON reply.

use serde::Deserialize;

use super::model::{CheckOutcome, Diagnostic, RunResult};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("checker reply is empty")]
    Empty,
    #[error("malformed checker reply: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wire shape of a reply. `errors` is `null` or missing when the checker
/// could not produce results, which is not the same as an empty list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckReply {
    #[serde(default)]
    errors: Option<Vec<Diagnostic>>,
    #[serde(default, alias = "internal_error")]
    internal_error: Option<String>,
    #[serde(default, alias = "pythonOutput")]
    output: Option<String>,
}

/// Decode a checker reply into a fresh [`RunResult`].
pub fn decode_response(raw: &str) -> Result<RunResult, PayloadError> {
    if raw.trim().is_empty() {
        return Err(PayloadError::Empty);
    }

    let reply: CheckReply = serde_json::from_str(raw)?;
    let outcome = match reply.errors {
        Some(diagnostics) => CheckOutcome::Succeeded(diagnostics),
        None => CheckOutcome::Failed,
    };

    Ok(RunResult {
        outcome,
        internal_error: reply.internal_error.unwrap_or_default(),
        program_output: reply.output.unwrap_or_default(),
    })
}
