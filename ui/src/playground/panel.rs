use dioxus::prelude::*;

use crate::core::format::format_range;
use crate::i18n;
use crate::t;

use super::model::{Diagnostic, PanelConfig, RunResult, SourceRange, Tab};
use super::view::{select_view, PanelView};

/// Animation delay applied to each loader dot.
const LOADER_DELAYS_MS: [u32; 3] = [0, 160, 320];

/// Results of a single check/run. Stateless: every render is derived from
/// the props, and tab changes are only requested through `set_active_tab`.
#[component]
pub fn ResultsPanel(
    result: RunResult,
    loading: bool,
    is_running: bool,
    active_tab: Tab,
    #[props(default)] config: PanelConfig,
    go_to_def: EventHandler<SourceRange>,
    set_active_tab: EventHandler<Tab>,
) -> Element {
    i18n::init();

    let body = match select_view(loading, is_running, active_tab, &result) {
        PanelView::Loading => render_loader(),
        PanelView::Diagnostics(diagnostics) => rsx! {
            ul { class: "results-panel__diagnostics",
                for (index, diagnostic) in diagnostics.iter().enumerate() {
                    {render_diagnostic(index, diagnostic, &config, go_to_def)}
                }
            }
        },
        PanelView::InternalError(error) => render_message(
            "results-panel__message results-panel__message--error",
            t!("results-internal-error", error = error),
        ),
        PanelView::FetchFailed => render_message(
            "results-panel__message results-panel__message--error",
            t!("results-fetch-failed"),
        ),
        PanelView::NoErrors => render_message(
            "results-panel__message results-panel__message--success",
            t!("results-no-errors"),
        ),
        PanelView::Running => render_message("results-panel__message", t!("results-running")),
        PanelView::Output(output) => rsx! {
            pre { class: "results-panel__output", "{output}" }
        },
        PanelView::RunPrompt => render_message("results-panel__message", t!("results-run-prompt")),
    };

    rsx! {
        section { class: "results-panel",
            div { class: "results-panel__tabs", role: "tablist",
                for tab in Tab::ALL {
                    {render_tab(tab, active_tab, set_active_tab)}
                }
            }
            div { class: "results-panel__body", role: "tabpanel", {body} }
        }
    }
}

fn tab_label(tab: Tab) -> String {
    match tab {
        Tab::Errors => t!("results-tab-errors"),
        Tab::Output => t!("results-tab-output"),
    }
}

fn render_tab(tab: Tab, active_tab: Tab, set_active_tab: EventHandler<Tab>) -> Element {
    let is_active = tab == active_tab;
    let class = if is_active {
        "results-panel__tab results-panel__tab--active"
    } else {
        "results-panel__tab"
    };
    let label = tab_label(tab);

    rsx! {
        button {
            key: "{tab}",
            r#type: "button",
            role: "tab",
            class: class,
            aria_selected: is_active,
            "data-tab": tab.as_str(),
            onclick: move |_| set_active_tab.call(tab),
            "{label}"
        }
    }
}

fn render_loader() -> Element {
    rsx! {
        div {
            class: "results-panel__loader",
            role: "status",
            aria_label: t!("results-loading-label"),
            for delay in LOADER_DELAYS_MS {
                span { class: "results-panel__dot", style: "animation-delay: {delay}ms" }
            }
        }
    }
}

fn render_message(class: &str, text: String) -> Element {
    rsx! {
        p { class: class, "{text}" }
    }
}

fn render_diagnostic(
    index: usize,
    diagnostic: &Diagnostic,
    config: &PanelConfig,
    go_to_def: EventHandler<SourceRange>,
) -> Element {
    let range = diagnostic.range;
    let position = format_range(range);
    let message = diagnostic.message.as_str();
    let kind = diagnostic.kind.as_str();
    let href = config.kind_href(kind);
    let hint = t!("results-jump-hint", range = position.clone());

    // Entries after the first get a separator border.
    let class = format!(
        "results-panel__entry {}{}",
        diagnostic.severity.css_class(),
        if index > 0 {
            " results-panel__entry--separated"
        } else {
            ""
        }
    );

    rsx! {
        li { key: "{index}", class: "{class}",
            span {
                class: "results-panel__diagnostic",
                role: "button",
                tabindex: 0,
                title: "{hint}",
                onclick: move |_| go_to_def.call(range),
                onkeydown: move |evt| {
                    let key = evt.key().to_string().to_lowercase();
                    if key == "enter" || key == " " {
                        evt.prevent_default();
                        go_to_def.call(range);
                    }
                },
                span { class: "results-panel__text", "{position}: {message} " }
                a { class: "results-panel__kind", href: "{href}", "[{kind}]" }
            }
        }
    }
}
