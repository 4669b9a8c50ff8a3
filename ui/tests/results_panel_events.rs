use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Event};
use dioxus::prelude::*;
use dioxus_html::prelude::{Code, Key, Location, Modifiers};
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter,
    SerializedKeyboardData, SerializedMouseData,
};
use pretty_assertions::assert_eq;

use ui::playground::{CheckOutcome, Diagnostic, ResultsPanel, RunResult, Severity, SourceRange, Tab};

/// Upper bound on element ids handed out by a single panel render.
const MAX_ELEMENT_ID: usize = 64;

thread_local! {
    static JUMPS: RefCell<Vec<SourceRange>> = const { RefCell::new(Vec::new()) };
    static TABS: RefCell<Vec<Tab>> = const { RefCell::new(Vec::new()) };
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    result: RunResult,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    rsx! {
        ResultsPanel {
            result: props.result.clone(),
            loading: false,
            is_running: false,
            active_tab: Tab::Errors,
            go_to_def: move |range: SourceRange| JUMPS.with(|j| j.borrow_mut().push(range)),
            set_active_tab: move |tab: Tab| TABS.with(|t| t.borrow_mut().push(tab)),
        }
    }
}

fn mount(result: RunResult) -> VirtualDom {
    ui::i18n::init();
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    JUMPS.with(|j| j.borrow_mut().clear());
    TABS.with(|t| t.borrow_mut().clear());

    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { result });
    dom.rebuild_in_place();
    dom
}

/// Dispatch `name` to every mounted element, in id order.
fn dispatch_everywhere(dom: &VirtualDom, name: &str, payload: impl Fn() -> Box<dyn Any>) {
    for id in 1..MAX_ELEMENT_ID {
        let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(payload()));
        dom.runtime()
            .handle_event(name, Event::new(data, true), ElementId(id));
    }
}

fn click_everything(dom: &VirtualDom) {
    dispatch_everywhere(dom, "click", || Box::new(SerializedMouseData::default()));
}

fn press_everywhere(dom: &VirtualDom, key: Key) {
    dispatch_everywhere(dom, "keydown", move || {
        Box::new(SerializedKeyboardData::new(
            key.clone(),
            Code::Unidentified,
            Location::Standard,
            false,
            Modifiers::empty(),
            false,
        ))
    });
}

/// Recorded values, first occurrence of each, in call order.
fn distinct<T: PartialEq + Copy>(calls: &RefCell<Vec<T>>) -> Vec<T> {
    let mut seen = Vec::new();
    for &call in calls.borrow().iter() {
        if !seen.contains(&call) {
            seen.push(call);
        }
    }
    seen
}

fn with_diagnostic(range: SourceRange) -> RunResult {
    RunResult {
        outcome: CheckOutcome::Succeeded(vec![Diagnostic {
            range,
            message: "unexpected".to_string(),
            kind: "bad-return".to_string(),
            severity: Severity::Error,
        }]),
        ..RunResult::default()
    }
}

#[test]
fn clicking_a_diagnostic_passes_its_range_unmodified() {
    let range = SourceRange::new(3, -5, 7, 0);
    let dom = mount(with_diagnostic(range));

    click_everything(&dom);

    JUMPS.with(|j| {
        assert!(!j.borrow().is_empty(), "diagnostic click was not delivered");
        assert!(j.borrow().iter().all(|r| *r == range));
        assert_eq!(distinct(j), vec![range]);
    });
}

#[test]
fn clicking_tabs_requests_each_tab() {
    let dom = mount(RunResult::default());

    click_everything(&dom);

    TABS.with(|t| assert_eq!(distinct(t), vec![Tab::Errors, Tab::Output]));
    JUMPS.with(|j| assert!(j.borrow().is_empty()));
}

#[test]
fn enter_and_space_jump_to_the_diagnostic() {
    let range = SourceRange::new(2, 12, 2, 14);

    for key in [Key::Enter, Key::Character(" ".to_string())] {
        let dom = mount(with_diagnostic(range));
        press_everywhere(&dom, key.clone());
        JUMPS.with(|j| assert_eq!(distinct(j), vec![range], "key {key:?}"));
        TABS.with(|t| assert!(t.borrow().is_empty()));
    }
}

#[test]
fn other_keys_are_ignored() {
    let dom = mount(with_diagnostic(SourceRange::new(1, 1, 1, 2)));

    press_everywhere(&dom, Key::Character("a".to_string()));
    press_everywhere(&dom, Key::Tab);

    JUMPS.with(|j| assert!(j.borrow().is_empty()));
}
