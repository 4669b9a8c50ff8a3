use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::format::format_range;
use crate::core::selection::range_to_span;
use crate::core::{platform, timing};
use crate::playground::{
    decode_response, format_cli_report, CheckOutcome, PanelConfig, ResultsPanel, RunResult,
    SourceRange, Tab,
};
use crate::t;

const SOURCE_EDITOR_ID: &str = "playground-source";
const RESPONSE_EDITOR_ID: &str = "playground-response";

const SAMPLE_SOURCE: &str = r#"def greet(name: str) -> str:
    return 42

greet("world")
print("hello")
"#;

const SAMPLE_RESPONSE: &str = r#"{
  "errors": [
    {
      "startLine": 2, "startColumn": 12, "endLine": 2, "endColumn": 14,
      "message": "Returned type `Literal[42]` is not assignable to declared return type `str`",
      "kind": "bad-return",
      "severity": 8
    }
  ],
  "internalError": "",
  "output": "hello\n"
}"#;

/// Host for the results panel: owns the run state and the tab, and replays a
/// checker reply pasted next to the source.
///
/// Reads a `PanelConfig` from context when the platform provides one.
#[component]
pub fn Playground() -> Element {
    let config = use_hook(|| try_consume_context::<PanelConfig>().unwrap_or_default());

    // Reactive dependency on the global language code, if provided.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut source = use_signal(|| SAMPLE_SOURCE.to_string());
    let mut response = use_signal(|| SAMPLE_RESPONSE.to_string());
    let mut result = use_signal(RunResult::default);
    let mut loading = use_signal(|| false);
    let mut running = use_signal(|| false);
    let initial_tab = config.initial_tab;
    let mut active_tab = use_signal(move || initial_tab);
    let mut check_generation = use_signal(|| 0_u64);
    let mut run_generation = use_signal(|| 0_u64);
    let mut status = use_signal(|| Option::<String>::None);

    let delay_ms = config.replay_delay_ms;

    let on_check = move |_| {
        let request = check_generation() + 1;
        check_generation.set(request);
        // A fresh check must not inherit the previous run's internal error.
        result.with_mut(|r| {
            r.internal_error.clear();
            r.outcome = CheckOutcome::Pending;
        });
        loading.set(true);
        let payload = response();

        spawn(async move {
            timing::sleep_ms(delay_ms).await;
            if check_generation() != request {
                debug!(request, "dropping superseded check reply");
                return;
            }
            match decode_response(&payload) {
                Ok(reply) => result.with_mut(|r| {
                    r.outcome = reply.outcome;
                    r.internal_error = reply.internal_error;
                }),
                Err(err) => {
                    warn!(%err, "checker reply rejected");
                    result.with_mut(|r| r.outcome = CheckOutcome::Failed);
                }
            }
            loading.set(false);
        });
    };

    let on_run = move |_| {
        let request = run_generation() + 1;
        run_generation.set(request);
        running.set(true);
        active_tab.set(Tab::Output);
        let payload = response();

        spawn(async move {
            timing::sleep_ms(delay_ms).await;
            if run_generation() != request {
                debug!(request, "dropping superseded run reply");
                return;
            }
            let output = match decode_response(&payload) {
                Ok(reply) => reply.program_output,
                Err(err) => {
                    warn!(%err, "run reply rejected");
                    String::new()
                }
            };
            result.with_mut(|r| r.program_output = output);
            running.set(false);
        });
    };

    let go_to_def = move |range: SourceRange| {
        let position = format_range(range);
        let span = range_to_span(&source.read(), range);
        match span {
            Some(span) => {
                if let Err(err) = platform::select_in_textarea(SOURCE_EDITOR_ID, span.start, span.end)
                {
                    warn!(%err, "unable to select source range");
                }
                status.set(Some(t!("playground-selection", range = position)));
            }
            None => status.set(Some(t!("playground-selection-outside", range = position))),
        }
    };

    let on_copy = move |_| {
        let report = format_cli_report(result.read().outcome.diagnostics());

        #[cfg(target_arch = "wasm32")]
        {
            spawn(async move {
                let outcome = platform::copy_to_clipboard(report).await;
                status.set(Some(copy_status(outcome)));
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let outcome = futures::executor::block_on(platform::copy_to_clipboard(report));
            status.set(Some(copy_status(outcome)));
        }
    };

    let has_diagnostics = !result.read().outcome.diagnostics().is_empty();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-playground",
            h1 { {t!("playground-title")} }
            p { {t!("playground-intro")} }

            div { class: "playground__layout",
                div { class: "playground__inputs",
                    label { class: "playground__label", r#for: SOURCE_EDITOR_ID,
                        {t!("playground-source-label")}
                    }
                    textarea {
                        id: SOURCE_EDITOR_ID,
                        class: "playground__editor",
                        spellcheck: "false",
                        value: "{source()}",
                        oninput: move |evt| source.set(evt.value()),
                    }

                    label { class: "playground__label", r#for: RESPONSE_EDITOR_ID,
                        {t!("playground-response-label")}
                    }
                    textarea {
                        id: RESPONSE_EDITOR_ID,
                        class: "playground__editor playground__editor--response",
                        spellcheck: "false",
                        value: "{response()}",
                        oninput: move |evt| response.set(evt.value()),
                    }

                    div { class: "playground__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            disabled: loading(),
                            onclick: on_check,
                            {t!("playground-check")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--accent",
                            disabled: running(),
                            onclick: on_run,
                            {t!("playground-run")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            disabled: !has_diagnostics,
                            onclick: on_copy,
                            {t!("playground-copy")}
                        }
                    }

                    if let Some(message) = status() {
                        p { class: "playground__status", "{message}" }
                    }
                }

                ResultsPanel {
                    result: result(),
                    loading: loading(),
                    is_running: running(),
                    active_tab: active_tab(),
                    config: config.clone(),
                    go_to_def: go_to_def,
                    set_active_tab: move |tab: Tab| active_tab.set(tab),
                }
            }
        }
    }
}

fn copy_status(outcome: Result<(), String>) -> String {
    match outcome {
        Ok(()) => t!("playground-copy-done"),
        Err(err) => {
            warn!(%err, "clipboard copy failed");
            t!("playground-copy-failed", error = err)
        }
    }
}
